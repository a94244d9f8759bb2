use serde::Serialize;

use kiosko_cart::Cart;
use kiosko_contact::ContactInfo;
use kiosko_core::Money;

/// What the summary region shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderSummary {
    EmptyCart,
    MissingContact,
    Order(OrderView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub customer: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub lines: Vec<SummaryLine>,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub subtotal: Money,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Build the summary view model.
///
/// An empty cart wins over everything else; `contact == None` means contact
/// data is required but absent.
pub fn summarize(cart: &Cart, contact: Option<&ContactInfo>) -> OrderSummary {
    if cart.is_empty() {
        return OrderSummary::EmptyCart;
    }
    let Some(contact) = contact else {
        return OrderSummary::MissingContact;
    };

    let lines = cart
        .lines()
        .map(|(item, subtotal)| SummaryLine {
            name: item.name.clone(),
            quantity: item.quantity,
            subtotal,
        })
        .collect();

    OrderSummary::Order(OrderView {
        customer: non_empty(&contact.full_name()),
        address: non_empty(&contact.address),
        phone: non_empty(&contact.phone),
        lines,
        total: cart.total(),
    })
}

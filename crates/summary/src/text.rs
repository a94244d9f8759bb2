use core::fmt::Write;

use kiosko_cart::Cart;
use kiosko_contact::ContactInfo;

use crate::model::{OrderSummary, summarize};
use crate::{EMPTY_CART_MESSAGE, NO_CONTACT_MESSAGE};

/// Render the order summary as plain text, one line per entry.
pub fn render(cart: &Cart, contact: Option<&ContactInfo>) -> String {
    let view = match summarize(cart, contact) {
        OrderSummary::EmptyCart => return EMPTY_CART_MESSAGE.to_string(),
        OrderSummary::MissingContact => return NO_CONTACT_MESSAGE.to_string(),
        OrderSummary::Order(view) => view,
    };

    let mut out = String::from("Pedido de:\n");
    if let Some(customer) = &view.customer {
        let _ = writeln!(out, "{customer}");
    }
    if let Some(address) = &view.address {
        let _ = writeln!(out, "Dirección: {address}");
    }
    if let Some(phone) = &view.phone {
        let _ = writeln!(out, "Teléfono: {phone}");
    }

    out.push_str("Productos:\n");
    for line in &view.lines {
        let _ = writeln!(out, "- {} × {} → {}", line.name, line.quantity, line.subtotal);
    }
    let _ = write!(out, "Total: {}", view.total);
    out
}

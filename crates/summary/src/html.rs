use core::fmt::Write;

use kiosko_cart::Cart;
use kiosko_contact::ContactInfo;

use crate::model::{OrderSummary, summarize};
use crate::{EMPTY_CART_MESSAGE, NO_CONTACT_MESSAGE};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the order summary as an HTML fragment for a summary region.
///
/// All user-provided text is escaped.
pub fn render_html(cart: &Cart, contact: Option<&ContactInfo>) -> String {
    let view = match summarize(cart, contact) {
        OrderSummary::EmptyCart => {
            return format!(r#"<p class="empty-cart">{EMPTY_CART_MESSAGE}</p>"#);
        }
        OrderSummary::MissingContact => {
            return format!(r#"<p class="empty-cart">{NO_CONTACT_MESSAGE}</p>"#);
        }
        OrderSummary::Order(view) => view,
    };

    let mut html = String::from("<h3>Pedido de:</h3>");
    if let Some(customer) = &view.customer {
        let _ = write!(html, "<p><strong>{}</strong></p>", escape(customer));
    }
    if let Some(address) = &view.address {
        let _ = write!(html, "<p>Dirección: {}</p>", escape(address));
    }
    if let Some(phone) = &view.phone {
        let _ = write!(html, "<p>Teléfono: {}</p>", escape(phone));
    }

    html.push_str("<h3>Productos:</h3><ul>");
    for line in &view.lines {
        let _ = write!(
            html,
            "<li>{} × {} → {}</li>",
            escape(&line.name),
            line.quantity,
            line.subtotal
        );
    }
    let _ = write!(html, "</ul><p><strong>Total: {}</strong></p>", view.total);
    html
}

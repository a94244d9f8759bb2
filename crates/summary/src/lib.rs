//! Order summary rendering.
//!
//! Pure functions of `(cart, contact)`: nothing here reads UI state, so the
//! output can be tested without a display surface.

pub mod html;
pub mod model;
pub mod text;

pub use html::render_html;
pub use model::{OrderSummary, OrderView, SummaryLine, summarize};
pub use text::render;

/// Shown instead of the summary while the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Actualmente no hay productos en el carrito";

/// Shown when contact data is required but has not been confirmed yet.
pub const NO_CONTACT_MESSAGE: &str = "No hay datos de contacto";

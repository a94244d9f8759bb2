//! Products as the storefront displays them.
//!
//! The presentation surface hands over product entries whose price is display
//! text (`"1,50 €"`); [`parse_price`] is the single place that turns such a
//! label into an exact [`kiosko_core::Money`].

pub mod catalog;
pub mod price;

pub use catalog::{Catalog, ProductEntry};
pub use price::{PriceParseError, parse_price};

//! Shopping cart: line items, the in-memory cart and its write-through store.

pub mod cart;
pub mod error;
pub mod line_item;
pub mod store;

pub use cart::Cart;
pub use error::CartError;
pub use line_item::LineItem;
pub use store::{CART_KEY, CartStore};

use thiserror::Error;

use kiosko_cart::CartError;
use kiosko_products::PriceParseError;
use kiosko_storage::StorageError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("invalid product price: {0}")]
    Price(#[from] PriceParseError),
}

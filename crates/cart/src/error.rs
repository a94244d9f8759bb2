use thiserror::Error;

use kiosko_core::DomainError;
use kiosko_storage::StorageError;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart amount rejected: {0}")]
    Amount(#[from] DomainError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

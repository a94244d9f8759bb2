//! Key-value storage backing the storefront session.
//!
//! Two scopes are modelled with the same trait: a persistent store that
//! survives restarts (cart, known user) and a transient per-session store
//! (confirmed contact snapshot).

pub mod error;
pub mod file;
pub mod json;
pub mod memory;
pub mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use json::{load_json, save_json};
pub use memory::InMemoryStore;
pub use store::KeyValueStore;

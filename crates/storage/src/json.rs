//! JSON encoding helpers on top of [`KeyValueStore`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Read and decode a JSON record. `Ok(None)` when the key is absent.
///
/// Corrupt records surface as [`StorageError::Malformed`]; callers decide
/// whether to recover.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Malformed {
            key: key.to_string(),
            source,
        })
}

/// Encode and write a JSON record.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

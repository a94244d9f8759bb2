//! Start-up configuration from the environment.

use std::path::PathBuf;
use std::sync::Arc;

use kiosko_session::{ContactSource, SessionConfig, SessionStores};
use kiosko_storage::{FileStore, InMemoryStore, KeyValueStore, StorageError};

pub const DATA_DIR_VAR: &str = "KIOSKO_DATA_DIR";
pub const CONTACT_SOURCE_VAR: &str = "KIOSKO_CONTACT_SOURCE";
pub const KEEP_CONTACT_VAR: &str = "KIOSKO_KEEP_CONTACT";

const DEFAULT_DATA_DIR: &str = ".kiosko";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Directory of the persistent store.
    pub data_dir: PathBuf,
    pub session: SessionConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            session: SessionConfig::default(),
        }
    }
}

impl TerminalConfig {
    /// Read the process environment. Invalid values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (testable without touching the
    /// process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(CONTACT_SOURCE_VAR) {
            match raw.parse::<ContactSource>() {
                Ok(source) => config.session.contact_source = source,
                Err(err) => tracing::warn!(%err, "{CONTACT_SOURCE_VAR} ignored"),
            }
        }

        if let Some(raw) = lookup(KEEP_CONTACT_VAR) {
            match raw.trim().parse::<bool>() {
                Ok(keep) => config.session.keep_contact = keep,
                Err(_) => tracing::warn!(value = %raw, "{KEEP_CONTACT_VAR} is not true/false; ignored"),
            }
        }

        if config.session.contact_source == ContactSource::Confirmed && !config.session.keep_contact
        {
            tracing::warn!("confirmed contact source without keeping contact: summary will never show contact data");
        }

        config
    }

    /// Persistent store in `data_dir`, transient store in memory.
    pub fn open_stores(&self) -> Result<SessionStores, StorageError> {
        let persistent: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&self.data_dir)?);
        Ok(SessionStores::new(persistent, Arc::new(InMemoryStore::new())))
    }
}

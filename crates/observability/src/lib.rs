//! Logging for the kiosko storefront.
//!
//! Session events (cart loads, rejected records, orders placed) are emitted
//! with `tracing`; this crate installs the subscriber that writes them to
//! stderr, leaving stdout to the storefront itself.

pub mod tracing;

pub use crate::tracing::{DEFAULT_FILTER, FORMAT_ENV, LogFormat};

/// Install the process subscriber, reading `RUST_LOG` and `KIOSKO_LOG_FORMAT`.
///
/// Later calls are no-ops.
pub fn init() {
    let format = std::env::var(FORMAT_ENV)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    crate::tracing::init(format);
}

//! Session controller: bridges user actions to the cart, the validator and
//! the summary renderer.
//!
//! Every operation runs to completion synchronously. State lives in the
//! explicitly constructed [`SessionController`]; there is no global state.

pub mod config;
pub mod controller;
pub mod error;
pub mod notice;
pub mod prompt;
pub mod user;

pub use config::{ContactSource, SessionConfig};
pub use controller::{CONTACT_KEY, Response, SessionController, SessionStores};
pub use error::SessionError;
pub use notice::Notice;
pub use prompt::Prompter;
pub use user::{Gender, Greeting, KNOWN_USER_KEY, KnownUser};

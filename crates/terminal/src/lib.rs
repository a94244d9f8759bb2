//! `kiosko-terminal`
//!
//! **Responsibility:** thin line-oriented presentation layer over the session
//! controller. It owns the display concerns the core leaves out: reading
//! product choices and form input, showing notices, rendering field
//! annotations next to field names, and answering prompts.

pub mod app;
pub mod command;
pub mod config;
pub mod prompt;

pub use app::TerminalApp;
pub use command::Command;
pub use config::TerminalConfig;
pub use prompt::LinePrompter;

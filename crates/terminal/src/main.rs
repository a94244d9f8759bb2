use std::io;

use anyhow::Context;

use kiosko_terminal::{TerminalApp, TerminalConfig};

fn main() -> anyhow::Result<()> {
    kiosko_observability::init();

    let config = TerminalConfig::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "starting storefront");

    let stores = config
        .open_stores()
        .context("failed to open the storefront data directory")?;

    let stdin = io::stdin();
    let mut app = TerminalApp::new(stores, config.session.clone(), stdin.lock(), io::stdout());
    app.run().context("terminal session failed")
}

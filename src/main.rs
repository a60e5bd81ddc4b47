use std::io;

use anyhow::Result;
use tracing::info;

use tabiya_shell::Session;

fn main() -> Result<()> {
    // Replies go to stdout; keep log lines out of them.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "tabiya starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}

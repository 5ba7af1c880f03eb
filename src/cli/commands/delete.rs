//! `credvault delete` — remove a value from the vault.

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::Result;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, key: &str) -> Result<()> {
    let session = Session::open(cli)?;
    session.store().delete(key)?;

    output::success(&format!("Deleted \"{key}\""));

    Ok(())
}

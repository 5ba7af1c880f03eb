//! `credvault get` — retrieve and print a single decrypted value.

use crate::cli::{Cli, Session};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, key: &str) -> Result<()> {
    let session = Session::open(cli)?;
    let value = session.store().get(key)?;

    // Plain stdout so the value can be captured by scripts.
    println!("{value}");

    Ok(())
}

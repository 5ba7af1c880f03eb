//! `credvault list` — display all key names.

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let session = Session::open(cli)?;
    let keys = session.store().list()?;

    output::print_keys(&keys);

    Ok(())
}

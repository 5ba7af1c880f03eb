//! `credvault set` — add or overwrite a value in the vault.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{Cli, Session};
use crate::errors::{Result, VaultError};

/// Execute the `set` command.
pub fn execute(cli: &Cli, key: &str, value: Option<&str>) -> Result<()> {
    // Determine the value from one of three sources.
    let secret_value = Zeroizing::new(if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Value provided on command line — it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| VaultError::CommandFailed(format!("failed to read stdin: {e}")))?;
        buf.trim_end_matches(['\r', '\n']).to_string()
    } else {
        // Source 3: Interactive masked prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter value for \"{key}\""))
            .allow_empty_password(true)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("input prompt: {e}")))?
    });

    let session = Session::open(cli)?;
    session.store().set(key, &secret_value)?;

    output::success(&format!("Stored encrypted value for \"{key}\""));

    Ok(())
}

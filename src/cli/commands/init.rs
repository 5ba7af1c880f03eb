//! `credvault init` — generate a fresh vault key.
//!
//! Prints the key; it is up to the operator to store it in `.env` or
//! the process environment. Nothing is written to disk.

use crate::cli::output;
use crate::cli::{project_dir, Cli};
use crate::config::Settings;
use crate::crypto::{env_line, generate_passphrase};
use crate::errors::Result;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::load(&project_dir(cli)?)?;
    let passphrase = zeroize::Zeroizing::new(generate_passphrase());

    output::info(&format!(
        "Generated {} for your {} file:",
        settings.key_var, settings.env_file
    ));
    println!("\n{}\n", env_line(&settings.key_var, &passphrase));
    output::warning("Save this key securely! You cannot recover data without it.");
    output::tip("Keep your .env file out of version control.");

    Ok(())
}

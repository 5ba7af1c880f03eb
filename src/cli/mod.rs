//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::key::KeyProvider;
use crate::vault::VaultStore;

/// credvault CLI: manage encrypted credentials.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "Manage encrypted credentials",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding .credvault.toml, .env and the vault (default: current directory)
    #[arg(long, global = true)]
    pub project_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a new vault key for your .env file
    Init,

    /// Store an encrypted value
    Set {
        /// Key name (e.g. admin_password)
        key: String,
        /// Value to store (omit for a masked prompt)
        value: Option<String>,
    },

    /// Retrieve a decrypted value
    Get {
        /// Key name
        key: String,
    },

    /// Delete a value
    Delete {
        /// Key name
        key: String,
    },

    /// List all keys
    List,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Everything a command needs to reach the vault: the project
/// directory, its settings and the process's key provider.
pub struct Session {
    pub project_dir: PathBuf,
    pub settings: Settings,
    pub keys: KeyProvider,
}

impl Session {
    /// Resolve the project directory and load its settings.
    ///
    /// The passphrase is not read here; the store resolves it when it
    /// first needs it.
    pub fn open(cli: &Cli) -> Result<Self> {
        let project_dir = project_dir(cli)?;
        let settings = Settings::load(&project_dir)?;
        let keys = KeyProvider::from_settings(&project_dir, &settings);
        Ok(Self {
            project_dir,
            settings,
            keys,
        })
    }

    /// A store handle for the configured vault file.
    pub fn store(&self) -> VaultStore<'_> {
        VaultStore::from_settings(&self.project_dir, &self.settings, &self.keys)
    }
}

/// The `--project-dir` argument, or the current directory.
pub fn project_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.project_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir()
            .map_err(|e| VaultError::CommandFailed(format!("cannot determine current directory: {e}"))),
    }
}

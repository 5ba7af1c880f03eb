//! Vault passphrase resolution.
//!
//! `KeyProvider` reads the passphrase from the process environment,
//! falling back to the project's dotenv file, and caches the first
//! successful result for its own lifetime. Construct one per process
//! and hand it to every `VaultStore` by reference.

pub mod dotenv;

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, VaultError};

/// Default variable name holding the passphrase.
pub const DEFAULT_KEY_VAR: &str = "VAULT_KEY";

/// Configuration sources a `KeyProvider` reads from.
#[derive(Debug)]
enum Source {
    /// Process environment, then an optional dotenv file.
    Config { env_file: Option<PathBuf> },
    /// Passphrase supplied by the caller; nothing is read.
    Fixed,
}

/// Resolves the vault passphrase once and keeps it in memory.
pub struct KeyProvider {
    /// Variable to read, e.g. `VAULT_KEY`.
    var: String,

    /// Where the passphrase comes from.
    source: Source,

    /// Resolved passphrase (zeroized on drop).
    cached: OnceCell<Zeroizing<String>>,
}

impl KeyProvider {
    /// Provider reading `var` from the environment, then from `env_file`.
    pub fn new(var: impl Into<String>, env_file: Option<PathBuf>) -> Self {
        Self {
            var: var.into(),
            source: Source::Config { env_file },
            cached: OnceCell::new(),
        }
    }

    /// Provider configured from project settings.
    pub fn from_settings(project_dir: &Path, settings: &Settings) -> Self {
        Self::new(
            settings.key_var.clone(),
            Some(settings.env_file_path(project_dir)),
        )
    }

    /// Provider around an already-known passphrase.
    ///
    /// An empty passphrase is treated as unset.
    pub fn from_passphrase(passphrase: impl Into<String>) -> Self {
        let provider = Self {
            var: DEFAULT_KEY_VAR.to_string(),
            source: Source::Fixed,
            cached: OnceCell::new(),
        };
        let passphrase = Zeroizing::new(passphrase.into());
        if !passphrase.is_empty() {
            let _ = provider.cached.set(passphrase);
        }
        provider
    }

    /// Name of the variable this provider reads.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Return the passphrase, reading configuration on first use only.
    pub fn resolve(&self) -> Result<&str> {
        if let Some(passphrase) = self.cached.get() {
            return Ok(passphrase.as_str());
        }

        let passphrase = self.read_sources()?;
        Ok(self.cached.get_or_init(|| passphrase).as_str())
    }

    fn read_sources(&self) -> Result<Zeroizing<String>> {
        let env_file = match self.source {
            Source::Config { ref env_file } => env_file.as_deref(),
            Source::Fixed => {
                return Err(VaultError::MissingKey {
                    var: self.var.clone(),
                })
            }
        };

        if let Ok(value) = std::env::var(&self.var) {
            if !value.is_empty() {
                tracing::debug!(var = %self.var, "passphrase resolved from environment");
                return Ok(Zeroizing::new(value));
            }
        }

        if let Some(path) = env_file {
            if let Some(value) = dotenv::lookup(path, &self.var)? {
                if !value.is_empty() {
                    tracing::debug!(var = %self.var, file = %path.display(), "passphrase resolved from dotenv file");
                    return Ok(Zeroizing::new(value));
                }
            }
        }

        Err(VaultError::MissingKey {
            var: self.var.clone(),
        })
    }
}

impl std::fmt::Debug for KeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyProvider")
            .field("var", &self.var)
            .field("source", &self.source)
            .field("resolved", &self.cached.get().is_some())
            .finish()
    }
}

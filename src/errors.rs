use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in credvault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Key material ---
    #[error("{var} is not set — run `credvault init` to generate a key, then add it to your environment or .env file")]
    MissingKey { var: String },

    // --- Codec errors ---
    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    // --- Store errors ---
    #[error("Vault at {} could not be decrypted — wrong passphrase or corrupted file", .path.display())]
    CorruptVault { path: PathBuf },

    #[error("Key '{0}' not found in vault")]
    KeyNotFound(String),

    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    #[error("Cannot persist vault at {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl VaultError {
    /// Process exit code the CLI uses for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::KeyNotFound(_) => 2,
            Self::MissingKey { .. } => 3,
            Self::Decryption(_) | Self::CorruptVault { .. } => 4,
            Self::Persistence { .. } => 5,
            _ => 1,
        }
    }
}

/// Convenience type alias for credvault results.
pub type Result<T> = std::result::Result<T, VaultError>;

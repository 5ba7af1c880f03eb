//! High-level vault operations used by the CLI and test tooling.
//!
//! `VaultStore` owns the path to the vault file and borrows the
//! process's `KeyProvider`. It keeps no state between calls: every
//! operation reads and decrypts the whole file, and every mutation
//! re-encrypts and rewrites it.
//!
//! There is no locking. Two processes running load → mutate → save at
//! the same time will lose one of the updates (the last save wins).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::codec;
use crate::errors::{Result, VaultError};
use crate::key::KeyProvider;

use super::record::{self, RecordMap};

/// Handle to a single encrypted vault file.
pub struct VaultStore<'a> {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Source of the passphrase.
    keys: &'a KeyProvider,
}

impl<'a> VaultStore<'a> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a handle for the vault file at `path`.
    ///
    /// Nothing is read or written until an operation is called.
    pub fn new(path: impl Into<PathBuf>, keys: &'a KeyProvider) -> Self {
        Self {
            path: path.into(),
            keys,
        }
    }

    /// Create a handle for the vault configured in `settings`.
    pub fn from_settings(project_dir: &Path, settings: &Settings, keys: &'a KeyProvider) -> Self {
        Self::new(settings.vault_path(project_dir), keys)
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Add or overwrite a record.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let mut records = self.load()?;
        records.insert(key.to_string(), value.to_string());
        self.save(&records)
    }

    /// Return the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        let mut records = self.load()?;
        records
            .remove(key)
            .ok_or_else(|| VaultError::KeyNotFound(key.to_string()))
    }

    /// Remove a record. Removing an absent key is not an error.
    pub fn delete(&self, key: &str) -> Result<()> {
        let mut records = self.load()?;
        if records.remove(key).is_none() {
            tracing::debug!(key, "delete of absent key");
        }
        self.save(&records)
    }

    /// All key names, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Read and decrypt the whole vault.
    ///
    /// A missing file is an empty vault. Anything that cannot be
    /// decrypted and parsed is reported as `CorruptVault`; a wrong
    /// passphrase and a damaged file look the same from here.
    pub fn load(&self) -> Result<RecordMap> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "vault file absent, treating as empty");
                return Ok(RecordMap::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => return Err(self.corrupt()),
            Err(source) => {
                return Err(VaultError::Persistence {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let passphrase = self.keys.resolve()?;

        let plaintext = codec::decrypt(&blob, passphrase.as_bytes())
            .map(Zeroizing::new)
            .map_err(|e| {
                tracing::debug!(path = %self.path.display(), error = %e, "vault decryption failed");
                self.corrupt()
            })?;

        let records = record::from_bytes(&plaintext).ok_or_else(|| self.corrupt())?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "vault loaded");
        Ok(records)
    }

    /// Encrypt `records` and replace the vault file with the result.
    ///
    /// The parent directory is created if needed. The file is written
    /// to a temp file first and renamed into place, so the vault on
    /// disk is always a complete snapshot.
    pub fn save(&self, records: &RecordMap) -> Result<()> {
        let passphrase = self.keys.resolve()?;
        let plaintext = record::to_bytes(records)?;
        let blob = codec::encrypt(&plaintext, passphrase.as_bytes())?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| VaultError::Persistence {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        write_atomic(&self.path, blob.as_bytes()).map_err(|source| VaultError::Persistence {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "vault saved");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the vault file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn corrupt(&self) -> VaultError {
        VaultError::CorruptVault {
            path: self.path.clone(),
        }
    }
}

/// Reject key names the CLI could never address.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(VaultError::InvalidKeyName("key name cannot be empty".into()));
    }
    Ok(())
}

/// Write `data` to a temp file next to `path`, then rename it over `path`.
///
/// The temp file is in the same directory so the rename stays on one
/// filesystem. On Unix the file is owner read/write only.
fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    Ok(())
}

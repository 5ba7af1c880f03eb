use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Project-level configuration, loaded from `.credvault.toml`.
///
/// Every field has a default so credvault works without any config
/// file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) holding the vault file.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the encrypted vault inside `vault_dir`.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Name of the variable holding the vault passphrase.
    #[serde(default = "default_key_var")]
    pub key_var: String,

    /// Dotenv file (relative to project root) consulted when the
    /// variable is not set in the process environment.
    #[serde(default = "default_env_file")]
    pub env_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    "config".to_string()
}

fn default_vault_file() -> String {
    "vault.encrypted.json".to_string()
}

fn default_key_var() -> String {
    "VAULT_KEY".to_string()
}

fn default_env_file() -> String {
    ".env".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            vault_file: default_vault_file(),
            key_var: default_key_var(),
            env_file: default_env_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".credvault.toml";

    /// Load settings from `<project_dir>/.credvault.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            VaultError::Config(format!("Failed to read {}: {e}", config_path.display()))
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Full path to the vault file.
    ///
    /// Example: `project_dir/config/vault.encrypted.json`
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join(&self.vault_file)
    }

    /// Full path to the dotenv file.
    pub fn env_file_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.env_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings() {
        let s = Settings::default();
        assert_eq!(s.vault_dir, "config");
        assert_eq!(s.vault_file, "vault.encrypted.json");
        assert_eq!(s.key_var, "VAULT_KEY");
        assert_eq!(s.env_file, ".env");
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.key_var, "VAULT_KEY");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_dir = "secrets"
vault_file = "creds.enc"
key_var = "E2E_VAULT_KEY"
env_file = ".env.test"
"#;
        fs::write(tmp.path().join(".credvault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "secrets");
        assert_eq!(settings.vault_file, "creds.enc");
        assert_eq!(settings.key_var, "E2E_VAULT_KEY");
        assert_eq!(settings.env_file, ".env.test");
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".credvault.toml"), "key_var = \"KEY\"\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.key_var, "KEY");
        assert_eq!(settings.vault_dir, "config");
        assert_eq!(settings.env_file, ".env");
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".credvault.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(matches!(result, Err(VaultError::Config(_))));
    }

    #[test]
    fn vault_path_builds_correct_path() {
        let s = Settings::default();
        let project = Path::new("/home/user/e2e");
        assert_eq!(
            s.vault_path(project),
            PathBuf::from("/home/user/e2e/config/vault.encrypted.json")
        );
        assert_eq!(s.env_file_path(project), PathBuf::from("/home/user/e2e/.env"));
    }
}

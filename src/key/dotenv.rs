//! Minimal `.env` file parsing.
//!
//! Only what is needed to find the vault passphrase in a project's
//! dotenv file; values are never exported to the process environment.

use std::fs;
use std::path::Path;

use crate::errors::{Result, VaultError};

/// Parse a single `.env` line into a (key, value) pair.
///
/// Returns `None` for blank lines, comments, and lines without `=`.
/// Handles: `export` prefix, double/single quotes, values with `=`.
pub fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);

    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);

    if key.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Look up `key` in the dotenv file at `path`.
///
/// Returns `Ok(None)` if the file does not exist or does not define the
/// key. When a key is defined more than once the last definition wins.
pub fn lookup(path: &Path, key: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| VaultError::Config(format!("failed to read {}: {e}", path.display())))?;

    Ok(content
        .lines()
        .filter_map(parse_env_line)
        .filter(|(k, _)| *k == key)
        .last()
        .map(|(_, v)| v.to_string()))
}

//! Fresh vault passphrases for first-time setup.

use rand::RngCore;
use zeroize::Zeroizing;

/// Entropy of a generated passphrase in bytes (256 bits).
const PASSPHRASE_BYTES: usize = 32;

/// Generate a random passphrase as 64 lowercase hex characters.
pub fn generate_passphrase() -> String {
    let mut bytes = Zeroizing::new([0u8; PASSPHRASE_BYTES]);
    rand::rng().fill_bytes(&mut bytes[..]);
    hex::encode(&bytes[..])
}

/// Format a passphrase as a `.env` line, e.g. `VAULT_KEY=ab12...`.
pub fn env_line(var: &str, passphrase: &str) -> String {
    format!("{var}={passphrase}")
}

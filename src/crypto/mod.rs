//! Cryptographic primitives for credvault.
//!
//! This module provides:
//! - OpenSSL-compatible `EVP_BytesToKey` key/IV derivation (`kdf`)
//! - The "Salted__" AES-256-CBC text codec (`codec`)
//! - Random passphrase generation for first-time setup (`passphrase`)

pub mod codec;
pub mod kdf;
pub mod passphrase;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, generate_passphrase};
pub use codec::{decrypt, encrypt};
pub use kdf::{derive_key_iv, DerivedKey};
pub use passphrase::{env_line, generate_passphrase};

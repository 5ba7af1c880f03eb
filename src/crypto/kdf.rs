//! Passphrase-based key derivation compatible with OpenSSL's `EVP_BytesToKey`.
//!
//! The vault format commits to the single-round MD5 variant used by
//! `openssl enc -md md5` and CryptoJS passphrase encryption:
//!
//! ```text
//! D_1 = MD5(passphrase || salt)
//! D_i = MD5(D_{i-1} || passphrase || salt)
//! key || iv = D_1 || D_2 || D_3   (first 48 bytes)
//! ```
//!
//! MD5 here is a format requirement, not a security choice.

use md5::{Digest, Md5};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of the per-encryption salt in bytes.
pub const SALT_LEN: usize = 8;

/// Length of the derived AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// Length of the derived CBC initialization vector in bytes.
pub const IV_LEN: usize = 16;

/// Key and IV derived from a passphrase and salt.
///
/// Both arrays are wiped when the value is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl DerivedKey {
    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }
}

/// Derive an AES-256 key and IV from `passphrase` and `salt`.
///
/// The same passphrase + salt always produce the same key and IV.
pub fn derive_key_iv(passphrase: &[u8], salt: &[u8]) -> DerivedKey {
    let mut material = Zeroizing::new(Vec::with_capacity(KEY_LEN + IV_LEN + 16));
    let mut previous: Option<md5::digest::Output<Md5>> = None;

    while material.len() < KEY_LEN + IV_LEN {
        let mut hasher = Md5::new();
        if let Some(ref prev) = previous {
            hasher.update(prev);
        }
        hasher.update(passphrase);
        hasher.update(salt);
        let digest = hasher.finalize();
        material.extend_from_slice(&digest);
        previous = Some(digest);
    }

    if let Some(ref mut prev) = previous {
        prev.as_mut_slice().zeroize();
    }

    let mut derived = DerivedKey {
        key: [0u8; KEY_LEN],
        iv: [0u8; IV_LEN],
    };
    derived.key.copy_from_slice(&material[..KEY_LEN]);
    derived.iv.copy_from_slice(&material[KEY_LEN..KEY_LEN + IV_LEN]);
    derived
}

/// Generate a random 8-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

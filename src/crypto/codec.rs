//! Passphrase encryption in the OpenSSL "Salted__" text format.
//!
//! Layout of an encrypted blob (before base64):
//!
//! ```text
//! [ "Salted__" | 8-byte salt | AES-256-CBC ciphertext (PKCS#7 padded) ]
//! ```
//!
//! The whole buffer is base64-encoded with the standard alphabet, which
//! makes the output readable by `openssl enc -d -aes-256-cbc -md md5 -a`
//! and by CryptoJS `AES.decrypt(blob, passphrase)`.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::kdf::{derive_key_iv, generate_salt, SALT_LEN};
use crate::errors::{VaultError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Marker that precedes the salt in every blob.
const SALT_MARKER: &[u8; 8] = b"Salted__";

/// AES block size in bytes.
const BLOCK_LEN: usize = 16;

/// Marker + salt.
const HEADER_LEN: usize = SALT_MARKER.len() + SALT_LEN;

/// Encrypt `plaintext` under `passphrase`.
///
/// A fresh salt is drawn on every call, so encrypting the same input
/// twice yields two different blobs.
pub fn encrypt(plaintext: &[u8], passphrase: &[u8]) -> Result<String> {
    let salt = generate_salt();
    let derived = derive_key_iv(passphrase, &salt);

    let cipher = Aes256CbcEnc::new_from_slices(derived.key(), derived.iv())
        .map_err(|e| VaultError::Encryption(format!("invalid key length: {e}")))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut output = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    output.extend_from_slice(SALT_MARKER);
    output.extend_from_slice(&salt);
    output.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(output))
}

/// Decrypt a blob produced by `encrypt` (or a compatible implementation).
///
/// A wrong passphrase normally shows up as a padding failure, but it can
/// occasionally unpad cleanly and return garbage. Callers must validate
/// the plaintext.
pub fn decrypt(blob: &str, passphrase: &[u8]) -> Result<Vec<u8>> {
    let raw = BASE64
        .decode(blob.trim())
        .map_err(|e| VaultError::Decryption(format!("invalid base64: {e}")))?;

    if raw.len() < SALT_MARKER.len() || &raw[..SALT_MARKER.len()] != SALT_MARKER {
        return Err(VaultError::Decryption("missing Salted__ marker".into()));
    }

    let ciphertext = &raw[HEADER_LEN.min(raw.len())..];
    if raw.len() < HEADER_LEN + BLOCK_LEN || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(VaultError::Decryption("blob is truncated".into()));
    }

    let salt = &raw[SALT_MARKER.len()..HEADER_LEN];
    let derived = derive_key_iv(passphrase, salt);

    let cipher = Aes256CbcDec::new_from_slices(derived.key(), derived.iv())
        .map_err(|e| VaultError::Decryption(format!("invalid key length: {e}")))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| VaultError::Decryption("bad padding".into()))
}

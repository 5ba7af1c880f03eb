//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - The decrypted `RecordMap` and its JSON encoding (`record`)
//! - `VaultStore` for get/set/delete/list over the vault file (`store`)

pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::RecordMap;
pub use store::VaultStore;

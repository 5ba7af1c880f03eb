pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod key;
pub mod vault;

pub use errors::{Result, VaultError};
pub use key::KeyProvider;
pub use vault::{RecordMap, VaultStore};

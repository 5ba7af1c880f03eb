//! The decrypted vault content: key name -> plaintext secret value.
//!
//! Serialized as a flat JSON object, e.g. `{"api":"s3cr3t"}`.

use std::collections::BTreeMap;

use zeroize::Zeroizing;

use crate::errors::{Result, VaultError};

/// Decrypted records. Keys are unique; iteration order is sorted.
pub type RecordMap = BTreeMap<String, String>;

/// Serialize a record map to JSON bytes (zeroized on drop).
pub fn to_bytes(records: &RecordMap) -> Result<Zeroizing<Vec<u8>>> {
    serde_json::to_vec(records)
        .map(Zeroizing::new)
        .map_err(|e| VaultError::Serialization(format!("records: {e}")))
}

/// Parse decrypted bytes into a record map.
///
/// Returns `None` for empty input, invalid UTF-8, or anything that is
/// not a flat string-to-string JSON object.
pub fn from_bytes(bytes: &[u8]) -> Option<RecordMap> {
    if bytes.is_empty() {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;
    serde_json::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_object() {
        let mut records = RecordMap::new();
        records.insert("api".into(), "s3cr3t".into());
        records.insert("admin_password".into(), "hunter2".into());

        let bytes = to_bytes(&records).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"admin_password":"hunter2","api":"s3cr3t"}"#
        );
    }

    #[test]
    fn parses_empty_object() {
        assert_eq!(from_bytes(b"{}"), Some(RecordMap::new()));
    }

    #[test]
    fn rejects_empty_and_malformed_input() {
        assert_eq!(from_bytes(b""), None);
        assert_eq!(from_bytes(&[0xff, 0xfe, 0x00]), None);
        assert_eq!(from_bytes(b"not json"), None);
        assert_eq!(from_bytes(br#"["api"]"#), None);
        assert_eq!(from_bytes(br#"{"api":{"nested":true}}"#), None);
    }
}

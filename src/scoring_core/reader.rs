//! Bulk transaction-log reader
//!
//! The input file is read once, synchronously, before any processing begins.
//! A missing file or malformed top-level JSON is fatal; individual record
//! shape is never validated here (that is the normalizer's concern).

use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ReaderError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for ReaderError {
    fn from(err: std::io::Error) -> Self {
        ReaderError::Io(err)
    }
}

impl From<serde_json::Error> for ReaderError {
    fn from(err: serde_json::Error) -> Self {
        ReaderError::Json(err)
    }
}

impl std::fmt::Display for ReaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReaderError::Io(e) => write!(f, "cannot read input file: {}", e),
            ReaderError::Json(e) => write!(f, "cannot parse input file: {}", e),
        }
    }
}

impl std::error::Error for ReaderError {}

/// Load the full transaction log: a UTF-8 JSON array of event objects.
pub fn load_events(path: &Path) -> Result<Vec<Value>, ReaderError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<Value> = serde_json::from_str(&raw)?;
    log::info!(
        "📖 Loaded {} raw transaction records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        fs::write(
            &path,
            r#"[{"userWallet": "w1", "action": "deposit"}, {"userWallet": "w2"}]"#,
        )
        .unwrap();

        let records = load_events(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["userWallet"], "w1");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_events(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ReaderError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"[{"userWallet": "w1""#).unwrap();

        let err = load_events(&path).unwrap_err();
        assert!(matches!(err, ReaderError::Json(_)));
    }

    #[test]
    fn test_top_level_object_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, r#"{"userWallet": "w1"}"#).unwrap();

        assert!(matches!(
            load_events(&path),
            Err(ReaderError::Json(_))
        ));
    }
}

//! Writer backend trait for the final scores table
//!
//! Defines the interface for persisting `wallet,credit_score` rows to
//! different backends.

use super::aggregator::WalletSummary;

#[derive(Debug)]
pub enum ScoreWriterError {
    Io(std::io::Error),
    Database(String),
}

impl From<std::io::Error> for ScoreWriterError {
    fn from(err: std::io::Error) -> Self {
        ScoreWriterError::Io(err)
    }
}

impl std::fmt::Display for ScoreWriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreWriterError::Io(e) => write!(f, "IO error: {}", e),
            ScoreWriterError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for ScoreWriterError {}

/// Backend trait for writing the scored wallet table
pub trait ScoreWriterBackend {
    /// Persist one row per wallet, in table order
    fn write_scores(&mut self, summaries: &[WalletSummary]) -> Result<(), ScoreWriterError>;

    /// Flush pending writes to storage
    fn flush(&mut self) -> Result<(), ScoreWriterError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}

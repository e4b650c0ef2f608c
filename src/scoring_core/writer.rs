//! Unified writer interface for the scored wallet table
//!
//! Routes writes to either CSV or SQLite backend based on configuration.

use super::aggregator::WalletSummary;
use super::csv_writer::CsvScoresWriter;
use super::sqlite_writer::SqliteScoresWriter;
use super::writer_backend::{ScoreWriterBackend, ScoreWriterError};
use crate::config::BackendType;
use std::path::PathBuf;

/// Unified writer that routes to either CSV or SQLite backend
pub enum ScoresWriter {
    Csv(CsvScoresWriter),
    Sqlite(SqliteScoresWriter),
}

impl ScoresWriter {
    /// Create a new scores writer based on backend type.
    /// For CSV, `base_path` is the output directory; for SQLite it is the
    /// database file path.
    pub fn new(backend: BackendType, base_path: PathBuf) -> Result<Self, ScoreWriterError> {
        match backend {
            BackendType::Csv => {
                let writer = CsvScoresWriter::new(base_path)?;
                Ok(ScoresWriter::Csv(writer))
            }
            BackendType::Sqlite => {
                let writer = SqliteScoresWriter::new(base_path)?;
                Ok(ScoresWriter::Sqlite(writer))
            }
        }
    }

    /// Write the full scored table to the configured backend
    pub fn write_scores(&mut self, summaries: &[WalletSummary]) -> Result<(), ScoreWriterError> {
        match self {
            ScoresWriter::Csv(w) => ScoreWriterBackend::write_scores(w, summaries),
            ScoresWriter::Sqlite(w) => ScoreWriterBackend::write_scores(w, summaries),
        }
    }

    /// Flush pending writes to storage
    pub fn flush(&mut self) -> Result<(), ScoreWriterError> {
        match self {
            ScoresWriter::Csv(w) => ScoreWriterBackend::flush(w),
            ScoresWriter::Sqlite(w) => ScoreWriterBackend::flush(w),
        }
    }

    /// Get backend type for logging
    pub fn backend_type(&self) -> &'static str {
        match self {
            ScoresWriter::Csv(w) => w.backend_type(),
            ScoresWriter::Sqlite(w) => w.backend_type(),
        }
    }
}

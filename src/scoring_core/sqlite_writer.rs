//! SQLite writer for wallet scores
//!
//! Persists the scored table into a `wallet_scores` table so downstream
//! tooling can query score history with SQL.

use super::aggregator::WalletSummary;
use super::writer_backend::{ScoreWriterBackend, ScoreWriterError};
use rusqlite::{params, Connection};
use std::fs;
use std::path::Path;

pub struct SqliteScoresWriter {
    conn: Connection,
}

impl SqliteScoresWriter {
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, ScoreWriterError> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)
            .map_err(|e| ScoreWriterError::Database(e.to_string()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS wallet_scores (
                wallet TEXT PRIMARY KEY,
                credit_score REAL NOT NULL
            )",
            [],
        )
        .map_err(|e| ScoreWriterError::Database(e.to_string()))?;

        log::info!("✅ SQLite scores writer initialized: {}", db_path.display());

        Ok(Self { conn })
    }
}

impl ScoreWriterBackend for SqliteScoresWriter {
    fn write_scores(&mut self, summaries: &[WalletSummary]) -> Result<(), ScoreWriterError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| ScoreWriterError::Database(e.to_string()))?;

        for summary in summaries {
            tx.execute(
                "INSERT OR REPLACE INTO wallet_scores (wallet, credit_score) VALUES (?1, ?2)",
                params![summary.wallet, summary.credit_score],
            )
            .map_err(|e| ScoreWriterError::Database(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| ScoreWriterError::Database(e.to_string()))?;

        log::debug!("✅ {} wallet scores written to SQLite", summaries.len());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ScoreWriterError> {
        // rusqlite commits on transaction commit; nothing buffered here
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "SQLite"
    }
}

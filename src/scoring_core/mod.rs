//! Scoring Core - Wallet Creditworthiness Pipeline
//!
//! This module provides the batch pipeline that turns a raw lending-protocol
//! event log into a bounded, comparable 0-1000 credit score per wallet.
//!
//! # Architecture
//!
//! ```text
//! JSON event log → load_events → normalize_events
//!     ↓
//! WalletAggregator (per-wallet USD totals, liquidations, activity, diversity)
//!     ↓
//! features::shape (ratios, caps, log-compression, sign inversion)
//!     ↓
//! CreditScorer (population min-max scaling + fixed weight vector)
//!     ↓
//! ScoresWriter → CSV or SQLite backend
//! ```
//!
//! Data flows strictly forward; no stage reads back from a later one.

pub mod aggregator;
pub mod csv_writer;
pub mod features;
pub mod normalizer;
pub mod pipeline;
pub mod reader;
pub mod scorer;
pub mod sqlite_writer;
pub mod writer;
pub mod writer_backend;

pub use aggregator::{WalletAggregator, WalletSummary};
pub use csv_writer::CsvScoresWriter;
pub use normalizer::{normalize_events, ActionKind, NormalizedEvent};
pub use pipeline::score_wallets;
pub use reader::{load_events, ReaderError};
pub use scorer::{CreditScorer, FEATURE_COUNT, FEATURE_WEIGHTS};
pub use sqlite_writer::SqliteScoresWriter;
pub use writer::ScoresWriter;
pub use writer_backend::{ScoreWriterBackend, ScoreWriterError};

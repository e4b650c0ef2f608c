use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendType {
    Csv,
    Sqlite,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration loaded from environment variables, all with defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendType,
    /// Path to the raw transaction log (JSON array)
    pub transactions_path: PathBuf,
    /// Directory receiving the scores CSV
    pub output_dir: PathBuf,
    /// SQLite database path, used when --backend sqlite
    pub db_path: PathBuf,
    /// Path of the markdown analysis report
    pub report_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = Self::parse_backend_from_args();

        let transactions_path = env::var("TRANSACTIONS_PATH")
            .unwrap_or_else(|_| "data/user-wallet-transactions.json".to_string());
        if transactions_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "TRANSACTIONS_PATH cannot be empty".to_string(),
            ));
        }

        let output_dir = env::var("OUTPUT_DIR").unwrap_or_else(|_| "output".to_string());
        if output_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "OUTPUT_DIR cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            backend,
            transactions_path: transactions_path.into(),
            output_dir: output_dir.into(),
            db_path: env::var("WALLETSCORE_DB_PATH")
                .unwrap_or_else(|_| "data/walletscore.db".to_string())
                .into(),
            report_path: env::var("SCORE_REPORT_PATH")
                .unwrap_or_else(|_| "analysis.md".to_string())
                .into(),
        })
    }

    /// Base path handed to the scores writer: the output directory for CSV,
    /// the database file for SQLite.
    pub fn scores_base_path(&self) -> PathBuf {
        match self.backend {
            BackendType::Csv => self.output_dir.clone(),
            BackendType::Sqlite => self.db_path.clone(),
        }
    }

    pub fn parse_backend_from_args() -> BackendType {
        let args: Vec<String> = env::args().collect();

        if let Some(idx) = args.iter().position(|x| x == "--backend") {
            match args.get(idx + 1).map(|s| s.as_str()) {
                Some("sqlite") => return BackendType::Sqlite,
                Some("csv") => return BackendType::Csv,
                Some(other) => {
                    log::warn!("Unknown backend '{}', defaulting to CSV", other);
                }
                None => {}
            }
        }

        BackendType::Csv // Default to CSV
    }
}

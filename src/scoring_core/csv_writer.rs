//! CSV writer for wallet scores - two columns, one row per wallet

use super::aggregator::WalletSummary;
use super::writer_backend::{ScoreWriterBackend, ScoreWriterError};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct CsvScoresWriter {
    file_path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl CsvScoresWriter {
    /// `base_path` is the output directory; it is created if absent and the
    /// scores land in `wallet_scores.csv` inside it.
    pub fn new(base_path: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&base_path)?;
        let file_path = base_path.join("wallet_scores.csv");
        log::info!("📝 Writing wallet scores to: {}", file_path.display());
        Ok(Self {
            file_path,
            writer: None,
        })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    fn write_rows(&mut self, summaries: &[WalletSummary]) -> std::io::Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "wallet,credit_score")?;
        for summary in summaries {
            writeln!(writer, "{},{}", summary.wallet, summary.credit_score)?;
        }

        self.writer = Some(writer);
        Ok(())
    }

    fn flush_rows(&mut self) -> std::io::Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for CsvScoresWriter {
    fn drop(&mut self) {
        let _ = self.flush_rows();
    }
}

impl ScoreWriterBackend for CsvScoresWriter {
    fn write_scores(&mut self, summaries: &[WalletSummary]) -> Result<(), ScoreWriterError> {
        self.write_rows(summaries)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ScoreWriterError> {
        self.flush_rows()?;
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "CSV"
    }
}

#[cfg(test)]
mod tests;

mod config;
pub mod report;
pub mod scoring_core;

pub use config::{BackendType, Config, ConfigError};

use scoring_core::{load_events, score_wallets, ScoresWriter};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    log::info!("🚀 Starting wallet credit scoring run");
    log::info!("   Transactions: {}", config.transactions_path.display());
    log::info!("   Output dir: {}", config.output_dir.display());
    log::info!("   Report: {}", config.report_path.display());

    // Fatal on missing/unparseable input: hard stop, no partial output
    let records = load_events(&config.transactions_path)?;

    let summaries = score_wallets(&records);
    if summaries.is_empty() {
        log::warn!("No wallets with financial-action history in input");
    }

    let mut writer = ScoresWriter::new(config.backend.clone(), config.scores_base_path())?;
    log::info!("📊 Backend: {}", writer.backend_type());
    writer.write_scores(&summaries)?;
    writer.flush()?;
    log::info!("📁 Saved {} wallet scores", summaries.len());

    report::write_analysis(&summaries, &config.report_path)?;
    log::info!("✅ Analysis report: {}", config.report_path.display());

    Ok(())
}

//! Batch scoring pipeline: raw records in, scored wallet table out

use super::aggregator::WalletAggregator;
use super::aggregator::WalletSummary;
use super::features;
use super::normalizer::normalize_events;
use super::scorer::CreditScorer;
use serde_json::Value;
use std::collections::BTreeSet;

/// Run the full pipeline over one batch of raw records.
///
/// The whole population is materialized before scoring because min-max
/// normalization needs global per-feature extrema; there is no streaming or
/// incremental mode.
pub fn score_wallets(records: &[Value]) -> Vec<WalletSummary> {
    let events = normalize_events(records);

    let unique_wallets: BTreeSet<&str> = events.iter().map(|e| e.wallet.as_str()).collect();
    let undefined_values = events.iter().filter(|e| e.usd_value.is_none()).count();
    log::info!(
        "Normalized {} records | unique wallets: {}",
        events.len(),
        unique_wallets.len()
    );
    if undefined_values > 0 {
        log::debug!(
            "{} records had non-numeric amount/price (counted as zero USD)",
            undefined_values
        );
    }

    let mut aggregator = WalletAggregator::new();
    for event in &events {
        aggregator.add_event(event);
    }
    let mut summaries = aggregator.into_summaries();
    log::info!("Aggregated {} wallets with financial history", summaries.len());

    for summary in summaries.iter_mut() {
        features::shape(summary);
    }

    CreditScorer::new().assign_scores(&mut summaries);

    summaries
}

//! Score distribution analysis and markdown report rendering
//!
//! Presentation-only collaborator: consumes the final scored table and owns
//! all bucket labels and report wording. Nothing here feeds back into the
//! core pipeline.

use crate::scoring_core::WalletSummary;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const BUCKET_COUNT: usize = 10;
pub const BUCKET_WIDTH: f64 = 100.0;

const LOW_SCORE_CUTOFF: f64 = 300.0;
const HIGH_SCORE_CUTOFF: f64 = 800.0;
const MAX_BAR_WIDTH: usize = 40;

/// Count scores into ten fixed-width buckets [0-100), ..., [900-1000].
/// A perfect 1000 lands in the last bucket.
pub fn bucket_counts(summaries: &[WalletSummary]) -> [usize; BUCKET_COUNT] {
    let mut counts = [0usize; BUCKET_COUNT];
    for summary in summaries {
        let index = ((summary.credit_score / BUCKET_WIDTH).floor() as usize).min(BUCKET_COUNT - 1);
        counts[index] += 1;
    }
    counts
}

pub fn bucket_label(index: usize) -> String {
    let low = index * BUCKET_WIDTH as usize;
    format!("{}-{}", low, low + BUCKET_WIDTH as usize)
}

/// Render the distribution as a markdown bar chart (one row per bucket).
pub fn render_histogram(counts: &[usize; BUCKET_COUNT]) -> String {
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);

    let mut chart = String::from("```text\n");
    for (index, &count) in counts.iter().enumerate() {
        let bar_len = (count * MAX_BAR_WIDTH).div_ceil(max_count);
        let bar_len = if count == 0 { 0 } else { bar_len.max(1) };
        let _ = writeln!(
            chart,
            "{:>9} | {:<width$} {}",
            bucket_label(index),
            "█".repeat(bar_len),
            count,
            width = MAX_BAR_WIDTH
        );
    }
    chart.push_str("```\n");
    chart
}

/// Write the human-readable analysis report for one scoring run.
pub fn write_analysis(summaries: &[WalletSummary], report_path: &Path) -> std::io::Result<()> {
    let counts = bucket_counts(summaries);
    let low_count = summaries
        .iter()
        .filter(|s| s.credit_score < LOW_SCORE_CUTOFF)
        .count();
    let high_count = summaries
        .iter()
        .filter(|s| s.credit_score > HIGH_SCORE_CUTOFF)
        .count();

    let mut report = String::new();
    report.push_str("# Wallet Credit Score Analysis\n\n");

    report.push_str("### Score Distribution\n\n");
    report.push_str(&render_histogram(&counts));
    report.push('\n');
    report.push_str(
        "The chart above shows the distribution of credit scores across all wallets. \
         Scores are min-max scaled within this run's wallet population, so they are \
         comparable to each other but not across runs over different populations.\n\n",
    );

    report.push_str("### Behavior of Low-Scoring Wallets (Score < 300)\n");
    let _ = writeln!(report, "- Total wallets in this range: {}", low_count);
    report.push_str("- Common traits:\n");
    report.push_str("  - High number of liquidations\n");
    report.push_str("  - Very low repayment ratios\n");
    report.push_str("  - Low transaction activity\n");
    report.push_str("  - Minimal asset diversity\n\n");

    report.push_str("### Behavior of High-Scoring Wallets (Score > 800)\n");
    let _ = writeln!(report, "- Total wallets in this range: {}", high_count);
    report.push_str("- Common traits:\n");
    report.push_str("  - Near-perfect repayment ratios\n");
    report.push_str("  - High number of transactions across long active periods\n");
    report.push_str("  - Good asset diversity\n");
    report.push_str("  - Low to zero liquidations\n\n");

    report.push_str(
        "Note: wallets whose only recorded activity is being liquidated never enter \
         the table at all; scoring covers wallets with deposit/borrow/repay/redemption \
         history only.\n\n",
    );
    report.push_str(
        "This scoring system offers a meaningful snapshot of DeFi wallet reliability \
         based on on-chain behavior.\n",
    );

    fs::write(report_path, report)?;
    log::debug!("Analysis report written ({} wallets)", summaries.len());
    Ok(())
}

//! Population-relative min-max scaling and weighted credit score assignment

use super::aggregator::WalletSummary;

pub const FEATURE_COUNT: usize = 7;

/// Hard-coded scoring policy: feature name → weight, in scoring order.
/// Weights sum to 1.0, so the weighted sum of [0,1]-scaled features is
/// guaranteed to land in [0, 1000] after the ×1000 stretch. Swapping the
/// policy means editing this table, not the aggregation.
pub const FEATURE_WEIGHTS: [(&str, f64); FEATURE_COUNT] = [
    ("repayment_ratio_capped", 0.25),
    ("borrow_inverse", 0.15),
    ("log_tx_count", 0.10),
    ("active_days", 0.10),
    ("asset_diversity_capped", 0.10),
    ("log_deposit", 0.10),
    ("liquidation_penalty", 0.20),
];

/// Two-phase scorer: collect per-feature extrema over the whole population,
/// then rescale and combine each row.
///
/// Min-max scaling makes scores population-relative: they are comparable
/// within one run's wallet set, not across runs with different populations.
pub struct CreditScorer;

impl CreditScorer {
    pub fn new() -> Self {
        Self
    }

    /// Assign `credit_score` to every row. An empty population is a
    /// degenerate no-op (logged), never a crash.
    pub fn assign_scores(&self, summaries: &mut [WalletSummary]) {
        if summaries.is_empty() {
            log::warn!("Empty wallet population, nothing to score");
            return;
        }

        let extrema = column_extrema(summaries);

        for summary in summaries.iter_mut() {
            let features = feature_vector(summary);
            let mut weighted_sum = 0.0;
            for (i, &(_, weight)) in FEATURE_WEIGHTS.iter().enumerate() {
                weighted_sum += scale(features[i], extrema[i]) * weight;
            }
            summary.credit_score = round2((weighted_sum * 1000.0).clamp(0.0, 1000.0));
        }
    }
}

impl Default for CreditScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// The seven shaped features of one row, in `FEATURE_WEIGHTS` order.
fn feature_vector(summary: &WalletSummary) -> [f64; FEATURE_COUNT] {
    [
        summary.repayment_ratio_capped,
        summary.borrow_inverse,
        summary.log_tx_count,
        summary.active_days as f64,
        summary.asset_diversity_capped,
        summary.log_deposit,
        summary.liquidation_penalty,
    ]
}

/// Extrema pass over the immutable snapshot of the table.
fn column_extrema(summaries: &[WalletSummary]) -> [(f64, f64); FEATURE_COUNT] {
    let mut extrema = [(f64::INFINITY, f64::NEG_INFINITY); FEATURE_COUNT];
    for summary in summaries {
        let features = feature_vector(summary);
        for (i, &value) in features.iter().enumerate() {
            let (min, max) = &mut extrema[i];
            *min = min.min(value);
            *max = max.max(value);
        }
    }
    extrema
}

/// Min-max rescale to [0, 1]. A zero-variance column maps every value to
/// 0.0 by convention.
fn scale(value: f64, (min, max): (f64, f64)) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_core::features;

    fn create_test_summary(wallet: &str) -> WalletSummary {
        let mut summary = WalletSummary::new(wallet.to_string());
        summary.total_usd_deposited = 1000.0;
        summary.total_usd_borrowed = 400.0;
        summary.total_usd_repaid = 400.0;
        summary.tx_count = 20;
        summary.active_days = 10;
        summary.asset_diversity = 3;
        summary
    }

    fn shape_and_score(mut summaries: Vec<WalletSummary>) -> Vec<WalletSummary> {
        for summary in summaries.iter_mut() {
            features::shape(summary);
        }
        CreditScorer::new().assign_scores(&mut summaries);
        summaries
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = FEATURE_WEIGHTS.iter().map(|&(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scores_bounded() {
        let mut summaries = Vec::new();
        for i in 0..10 {
            let mut summary = create_test_summary(&format!("w{}", i));
            summary.total_usd_borrowed = 100.0 * i as f64;
            summary.total_usd_repaid = 50.0 * i as f64;
            summary.num_liquidations = i as u64;
            summary.tx_count = 1 + i as u64;
            summaries.push(summary);
        }

        for summary in shape_and_score(summaries) {
            assert!(
                (0.0..=1000.0).contains(&summary.credit_score),
                "score out of range: {}",
                summary.credit_score
            );
        }
    }

    #[test]
    fn test_single_wallet_zero_variance_convention() {
        // Every column has zero variance, so every scaled feature is 0.0 and
        // the score collapses to 0.0
        let scored = shape_and_score(vec![create_test_summary("w1")]);
        assert_eq!(scored[0].credit_score, 0.0);
    }

    #[test]
    fn test_liquidation_strictly_lowers_score() {
        let clean = create_test_summary("clean");
        let mut liquidated = create_test_summary("liquidated");
        liquidated.num_liquidations = 1;

        let scored = shape_and_score(vec![clean, liquidated]);
        let clean_score = scored.iter().find(|s| s.wallet == "clean").unwrap();
        let liq_score = scored.iter().find(|s| s.wallet == "liquidated").unwrap();
        assert!(
            liq_score.credit_score < clean_score.credit_score,
            "liquidated wallet must score strictly lower ({} vs {})",
            liq_score.credit_score,
            clean_score.credit_score
        );
    }

    #[test]
    fn test_deterministic_across_runs() {
        let build = || {
            let mut summaries = Vec::new();
            for i in 0..20 {
                let mut summary = create_test_summary(&format!("w{}", i));
                summary.total_usd_deposited = 10.0 * (i + 1) as f64;
                summary.num_liquidations = (i % 3) as u64;
                summaries.push(summary);
            }
            shape_and_score(summaries)
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_empty_population_is_noop() {
        let mut summaries: Vec<WalletSummary> = Vec::new();
        CreditScorer::new().assign_scores(&mut summaries);
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_scores_rounded_to_two_decimals() {
        let mut summaries = Vec::new();
        for i in 0..7 {
            let mut summary = create_test_summary(&format!("w{}", i));
            summary.tx_count = 1 + 3 * i as u64;
            summary.total_usd_deposited = 17.3 * (i + 1) as f64;
            summaries.push(summary);
        }

        for summary in shape_and_score(summaries) {
            let scaled = summary.credit_score * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }
}

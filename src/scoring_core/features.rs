//! Ratio derivation and feature shaping: dimensionless, bounded, monotonic-in-"goodness"

use super::aggregator::WalletSummary;

/// Raw diversity above this adds no further credit.
pub const ASSET_DIVERSITY_CAP: u64 = 10;

/// Fill the derived ratios and shaped features of one summary row.
///
/// Pure and per-row: no cross-population state enters until the scorer's
/// min-max pass.
///
/// Sentinel policy (behavioral contract, not an accident):
/// - a wallet that never borrowed gets `repayment_ratio = 1.0`, i.e. it is
///   treated as fully repaid;
/// - a wallet that never deposited gets `borrow_to_deposit = 0.0`.
pub fn shape(summary: &mut WalletSummary) {
    summary.repayment_ratio = if summary.total_usd_borrowed > 0.0 {
        summary.total_usd_repaid / summary.total_usd_borrowed
    } else {
        1.0
    };

    summary.borrow_to_deposit = if summary.total_usd_deposited > 0.0 {
        summary.total_usd_borrowed / summary.total_usd_deposited
    } else {
        0.0
    };

    // Over-repayment must not inflate the score
    summary.repayment_ratio_capped = summary.repayment_ratio.min(1.0);

    // Inverted leverage: higher is safer, range [0, 1]
    summary.borrow_inverse = 1.0 - summary.borrow_to_deposit.min(1.0);

    summary.log_tx_count = (summary.tx_count as f64).ln_1p();
    summary.log_deposit = summary.total_usd_deposited.ln_1p();

    summary.asset_diversity_capped = summary.asset_diversity.min(ASSET_DIVERSITY_CAP) as f64;

    // More liquidations push this more negative; unbounded below
    summary.liquidation_penalty = -(summary.num_liquidations as f64);
}

//! Per-wallet aggregation of normalized events into raw behavioral metrics

use super::normalizer::{ActionKind, NormalizedEvent};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One row per wallet: raw metrics, derived ratios, shaped features and the
/// final score. Raw metrics are filled here; ratios and shaped features by
/// `features::shape`; `credit_score` by the scorer. The row is never mutated
/// after score assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletSummary {
    pub wallet: String,

    pub total_usd_deposited: f64,
    pub total_usd_borrowed: f64,
    pub total_usd_repaid: f64,
    pub total_usd_redeemed: f64,
    pub num_liquidations: u64,
    pub tx_count: u64,
    pub active_days: u64,
    pub asset_diversity: u64,

    pub repayment_ratio: f64,
    pub borrow_to_deposit: f64,

    pub repayment_ratio_capped: f64,
    pub borrow_inverse: f64,
    pub log_tx_count: f64,
    pub log_deposit: f64,
    pub asset_diversity_capped: f64,
    pub liquidation_penalty: f64,

    pub credit_score: f64,
}

impl WalletSummary {
    pub fn new(wallet: String) -> Self {
        Self {
            wallet,
            total_usd_deposited: 0.0,
            total_usd_borrowed: 0.0,
            total_usd_repaid: 0.0,
            total_usd_redeemed: 0.0,
            num_liquidations: 0,
            tx_count: 0,
            active_days: 0,
            asset_diversity: 0,
            repayment_ratio: 0.0,
            borrow_to_deposit: 0.0,
            repayment_ratio_capped: 0.0,
            borrow_inverse: 0.0,
            log_tx_count: 0.0,
            log_deposit: 0.0,
            asset_diversity_capped: 0.0,
            liquidation_penalty: 0.0,
            credit_score: 0.0,
        }
    }
}

#[derive(Debug, Default)]
struct FinancialTotals {
    deposited: f64,
    borrowed: f64,
    repaid: f64,
    redeemed: f64,
}

/// Accumulates events into per-wallet metric maps, then joins them into
/// summary rows.
///
/// All maps are `BTreeMap`s keyed by wallet: iteration (and therefore output
/// order and float accumulation order) is deterministic, so two runs over the
/// same input produce identical scores.
pub struct WalletAggregator {
    financial_totals: BTreeMap<String, FinancialTotals>,
    liquidation_counts: BTreeMap<String, u64>,
    tx_counts: BTreeMap<String, u64>,
    active_dates: BTreeMap<String, BTreeSet<NaiveDate>>,
    asset_symbols: BTreeMap<String, BTreeSet<String>>,
}

impl WalletAggregator {
    pub fn new() -> Self {
        Self {
            financial_totals: BTreeMap::new(),
            liquidation_counts: BTreeMap::new(),
            tx_counts: BTreeMap::new(),
            active_dates: BTreeMap::new(),
            asset_symbols: BTreeMap::new(),
        }
    }

    pub fn add_event(&mut self, event: &NormalizedEvent) {
        // Financial totals: only the four relevant actions, undefined USD
        // values contribute zero.
        if event.action.is_financial() {
            let totals = self
                .financial_totals
                .entry(event.wallet.clone())
                .or_default();
            let usd = event.usd_value.unwrap_or(0.0);
            match event.action {
                ActionKind::Deposit => totals.deposited += usd,
                ActionKind::Borrow => totals.borrowed += usd,
                ActionKind::Repay => totals.repaid += usd,
                ActionKind::RedeemUnderlying => totals.redeemed += usd,
                _ => unreachable!("is_financial covers exactly these four kinds"),
            }
        }

        if event.action == ActionKind::LiquidationCall {
            *self
                .liquidation_counts
                .entry(event.wallet.clone())
                .or_insert(0) += 1;
        }

        // Activity metrics run over the FULL event set, unrecognized actions
        // included.
        *self.tx_counts.entry(event.wallet.clone()).or_insert(0) += 1;

        if let Some(ts) = event.timestamp {
            self.active_dates
                .entry(event.wallet.clone())
                .or_default()
                .insert(ts.date_naive());
        }

        self.asset_symbols
            .entry(event.wallet.clone())
            .or_default()
            .insert(event.asset_symbol.clone());
    }

    /// Join the metric maps into summary rows.
    ///
    /// The wallet set is exactly "wallets with at least one financial
    /// action". Wallets that only ever appear as liquidation targets (or
    /// with unrecognized actions) never enter the table — a known scope
    /// limitation carried over deliberately. Joins are left-preserving with
    /// zero fill.
    pub fn into_summaries(self) -> Vec<WalletSummary> {
        let Self {
            financial_totals,
            liquidation_counts,
            tx_counts,
            active_dates,
            asset_symbols,
        } = self;

        financial_totals
            .into_iter()
            .map(|(wallet, totals)| {
                let mut summary = WalletSummary::new(wallet);
                summary.total_usd_deposited = totals.deposited;
                summary.total_usd_borrowed = totals.borrowed;
                summary.total_usd_repaid = totals.repaid;
                summary.total_usd_redeemed = totals.redeemed;
                summary.num_liquidations = liquidation_counts
                    .get(&summary.wallet)
                    .copied()
                    .unwrap_or(0);
                summary.tx_count = tx_counts.get(&summary.wallet).copied().unwrap_or(0);
                summary.active_days = active_dates
                    .get(&summary.wallet)
                    .map(|dates| dates.len() as u64)
                    .unwrap_or(0);
                summary.asset_diversity = asset_symbols
                    .get(&summary.wallet)
                    .map(|symbols| symbols.len() as u64)
                    .unwrap_or(0);
                summary
            })
            .collect()
    }
}

impl Default for WalletAggregator {
    fn default() -> Self {
        Self::new()
    }
}

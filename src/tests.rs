#[cfg(test)]
mod tests {
    use crate::config::{BackendType, Config};
    use crate::report;
    use crate::scoring_core::WalletSummary;

    /// Test backend selection falls back to CSV without a --backend flag
    #[test]
    fn test_default_backend_is_csv() {
        assert_eq!(Config::parse_backend_from_args(), BackendType::Csv);
    }

    /// Test config defaults when no environment overrides are present
    #[test]
    fn test_config_defaults() {
        let config = Config::from_env().unwrap();
        assert!(config
            .transactions_path
            .to_string_lossy()
            .ends_with("user-wallet-transactions.json"));
        assert_eq!(config.scores_base_path(), config.output_dir);
    }

    /// Test that bucket totals always account for every wallet
    #[test]
    fn test_bucket_counts_partition_population() {
        let summaries: Vec<WalletSummary> = [13.0, 13.0, 500.0, 999.0, 1000.0]
            .iter()
            .map(|&score| {
                let mut s = WalletSummary::new("w".to_string());
                s.credit_score = score;
                s
            })
            .collect();

        let counts = report::bucket_counts(&summaries);
        assert_eq!(counts.iter().sum::<usize>(), summaries.len());
    }
}

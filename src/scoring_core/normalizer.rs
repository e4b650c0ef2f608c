//! Event normalization from raw lending-protocol JSON records to a flat, uniform shape

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Raw amounts are integer-denominated in a fixed-point unit of 1e6.
pub const FIXED_POINT_UNIT: f64 = 1_000_000.0;

/// Protocol action kind, lowercased on parse.
///
/// Only the five recognized kinds carry protocol semantics; anything else is
/// retained as `Other` so activity counts still see the event, but it never
/// contributes to financial totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Deposit,
    Borrow,
    Repay,
    RedeemUnderlying,
    LiquidationCall,
    Other(String),
}

impl ActionKind {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "deposit" => ActionKind::Deposit,
            "borrow" => ActionKind::Borrow,
            "repay" => ActionKind::Repay,
            "redeemunderlying" => ActionKind::RedeemUnderlying,
            "liquidationcall" => ActionKind::LiquidationCall,
            other => ActionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Deposit => "deposit",
            ActionKind::Borrow => "borrow",
            ActionKind::Repay => "repay",
            ActionKind::RedeemUnderlying => "redeemunderlying",
            ActionKind::LiquidationCall => "liquidationcall",
            ActionKind::Other(s) => s,
        }
    }

    /// True for the four actions that contribute to USD totals.
    pub fn is_financial(&self) -> bool {
        matches!(
            self,
            ActionKind::Deposit
                | ActionKind::Borrow
                | ActionKind::Repay
                | ActionKind::RedeemUnderlying
        )
    }
}

/// One flat record per raw event. The normalizer never drops a record:
/// malformed fields coerce to `None` / empty instead of failing the run.
#[derive(Debug, Clone)]
pub struct NormalizedEvent {
    pub wallet: String,
    pub action: ActionKind,
    /// `None` when the raw timestamp was missing or unparseable; such events
    /// are excluded from date-bucketed aggregates only.
    pub timestamp: Option<DateTime<Utc>>,
    pub asset_symbol: String,
    /// `(amount / 1e6) * asset_price_usd`; `None` when either operand was
    /// non-numeric. Downstream sums treat `None` as a zero contribution.
    pub usd_value: Option<f64>,
}

impl NormalizedEvent {
    pub fn from_raw(record: &Value) -> Self {
        let wallet = record
            .get("userWallet")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let action = ActionKind::parse(
            record
                .get("action")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        );

        let timestamp = coerce_timestamp(record.get("timestamp"));

        let data = record.get("actionData");
        let asset_symbol = data
            .and_then(|d| d.get("assetSymbol"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let amount = coerce_f64(data.and_then(|d| d.get("amount")));
        let asset_price_usd = coerce_f64(data.and_then(|d| d.get("assetPriceUSD")));
        let usd_value = match (amount, asset_price_usd) {
            (Some(amount), Some(price)) => Some((amount / FIXED_POINT_UNIT) * price),
            _ => None,
        };

        Self {
            wallet,
            action,
            timestamp,
            asset_symbol,
            usd_value,
        }
    }
}

/// Normalize a full batch. Output length always equals input length.
pub fn normalize_events(records: &[Value]) -> Vec<NormalizedEvent> {
    records.iter().map(NormalizedEvent::from_raw).collect()
}

/// Lenient numeric coercion: JSON numbers and numeric strings parse,
/// everything else is undefined.
fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Epoch-seconds coercion; accepts integers and integer strings.
fn coerce_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let secs = match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    DateTime::from_timestamp(secs, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_valid_record() {
        let record = json!({
            "userWallet": "0x00b2fa40ef2ea2d0b64ba5f84eb4a7a2a5a7b531",
            "action": "Deposit",
            "timestamp": 1629178166,
            "actionData": {
                "amount": "2000000",
                "assetSymbol": "USDC",
                "assetPriceUSD": "1.0"
            }
        });

        let event = NormalizedEvent::from_raw(&record);
        assert_eq!(event.wallet, "0x00b2fa40ef2ea2d0b64ba5f84eb4a7a2a5a7b531");
        assert_eq!(event.action, ActionKind::Deposit);
        assert_eq!(event.asset_symbol, "USDC");
        assert_eq!(event.usd_value, Some(2.0));
        assert_eq!(event.timestamp.unwrap().timestamp(), 1629178166);
    }

    #[test]
    fn test_action_case_insensitive_and_retained() {
        assert_eq!(ActionKind::parse("BORROW"), ActionKind::Borrow);
        assert_eq!(
            ActionKind::parse("RedeemUnderlying"),
            ActionKind::RedeemUnderlying
        );
        assert_eq!(
            ActionKind::parse("FlashLoan"),
            ActionKind::Other("flashloan".to_string())
        );
        assert!(!ActionKind::parse("liquidationcall").is_financial());
        assert!(ActionKind::parse("repay").is_financial());
    }

    #[test]
    fn test_malformed_amount_yields_undefined_usd() {
        let record = json!({
            "userWallet": "w1",
            "action": "deposit",
            "timestamp": 1629178166,
            "actionData": {
                "amount": "not-a-number",
                "assetSymbol": "DAI",
                "assetPriceUSD": "1.0"
            }
        });

        let event = NormalizedEvent::from_raw(&record);
        assert_eq!(event.usd_value, None);
        // Other fields still normalize
        assert_eq!(event.action, ActionKind::Deposit);
        assert_eq!(event.asset_symbol, "DAI");
    }

    #[test]
    fn test_bad_timestamp_becomes_none() {
        let record = json!({
            "userWallet": "w1",
            "action": "borrow",
            "timestamp": "yesterday",
            "actionData": { "amount": "1000000", "assetSymbol": "WETH", "assetPriceUSD": "3000" }
        });

        let event = NormalizedEvent::from_raw(&record);
        assert!(event.timestamp.is_none());
        assert_eq!(event.usd_value, Some(3.0));
    }

    #[test]
    fn test_no_records_dropped() {
        // A non-object entry still produces a (degenerate) normalized event
        let records = vec![json!({"userWallet": "w1", "action": "deposit"}), json!(42)];
        let events = normalize_events(&records);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].wallet, "");
        assert_eq!(events[1].usd_value, None);
    }

    #[test]
    fn test_numeric_timestamp_string() {
        let record = json!({
            "userWallet": "w1",
            "action": "repay",
            "timestamp": "1629178166",
            "actionData": {}
        });
        let event = NormalizedEvent::from_raw(&record);
        assert_eq!(event.timestamp.unwrap().timestamp(), 1629178166);
    }
}

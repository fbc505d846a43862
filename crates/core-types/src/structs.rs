use crate::enums::{Direction, TagField};
use crate::error::CoreError;
use crate::lenient::{number_or_zero, optional_text};
use crate::tags::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed position as recorded in the journal.
///
/// `pnl_usd` is the ground truth for every calculation; it is never
/// re-derived from the prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(default, deserialize_with = "optional_text")]
    pub ticker: Option<String>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub entry_price: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub exit_price: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub position_size: f64,
    /// `0.0` means no stop was recorded.
    #[serde(default, deserialize_with = "number_or_zero")]
    pub stop_loss: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub target_price: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub pnl_usd: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub pnl_percent: f64,
    #[serde(default, deserialize_with = "optional_text")]
    pub entry_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub exit_date: Option<String>,
    #[serde(default)]
    pub strategy: Category,
    #[serde(default)]
    pub setup_tags: Category,
    #[serde(default)]
    pub session_tags: Category,
}

impl TradeRecord {
    /// The exit date, or the entry date for records without one.
    pub fn trade_date(&self) -> Option<&str> {
        self.exit_date.as_deref().or(self.entry_date.as_deref())
    }

    /// The key trades are ordered by. ISO dates sort correctly as strings.
    pub fn chronological_key(&self) -> &str {
        self.trade_date().unwrap_or("")
    }

    /// Parses the date portion of [`TradeRecord::trade_date`]. A time of day
    /// may follow after a `T` or a space; anything else after the date is invalid.
    pub fn close_date(&self) -> Result<NaiveDate, CoreError> {
        let raw = self.trade_date().unwrap_or("");
        let invalid = || CoreError::InvalidDate(raw.to_string());

        let (date, rest) = NaiveDate::parse_and_remainder(raw.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
        if rest.is_empty() || rest.starts_with(['T', ' ']) {
            Ok(date)
        } else {
            Err(invalid())
        }
    }

    pub fn category(&self, field: TagField) -> &Category {
        match field {
            TagField::Strategy => &self.strategy,
            TagField::Setup => &self.setup_tags,
            TagField::Session => &self.session_tags,
        }
    }
}

/// A single deposit into or withdrawal from the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub amount: f64,
    #[serde(default, deserialize_with = "optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Starting balance and the cash that has moved in and out since.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub starting_balance: f64,
    #[serde(default)]
    pub deposits: Vec<CashFlow>,
    #[serde(default)]
    pub withdrawals: Vec<CashFlow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl AccountConfig {
    pub fn new(starting_balance: f64) -> Self {
        Self {
            starting_balance,
            ..Self::default()
        }
    }

    pub fn total_deposits(&self) -> f64 {
        self.deposits.iter().map(|d| d.amount).sum()
    }

    pub fn total_withdrawals(&self) -> f64 {
        self.withdrawals.iter().map(|w| w.amount).sum()
    }

    /// The capital percentage metrics are measured against.
    pub fn initial_capital(&self) -> f64 {
        self.starting_balance + self.total_deposits() - self.total_withdrawals()
    }

    /// Reports values a journal should never contain. Callers decide whether
    /// to reject the record or carry on with it.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.starting_balance < 0.0 {
            return Err(CoreError::InvalidInput(
                "starting_balance".to_string(),
                format!("must not be negative, got {}", self.starting_balance),
            ));
        }
        if let Some(flow) = self.deposits.iter().chain(&self.withdrawals).find(|f| f.amount < 0.0) {
            return Err(CoreError::InvalidInput(
                "cash flow amount".to_string(),
                format!("must not be negative, got {}", flow.amount),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_decodes_with_missing_and_malformed_fields() {
        let json = r#"{
            "ticker": "AAPL",
            "direction": "SHORT",
            "entry_price": "101.5",
            "exit_price": null,
            "pnl_usd": -42.0,
            "exit_date": "2025-03-04T15:30:00",
            "setup_tags": ["Breakout", "Gap"],
            "notes": "ignored"
        }"#;
        let trade: TradeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(trade.direction, Direction::Short);
        assert_eq!(trade.entry_price, 101.5);
        assert_eq!(trade.exit_price, 0.0);
        assert_eq!(trade.stop_loss, 0.0);
        assert_eq!(trade.setup_tags.as_str(), "Breakout");
        assert!(trade.strategy.is_unclassified());
        assert_eq!(trade.close_date().unwrap(), NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
    }

    #[test]
    fn trade_date_falls_back_to_entry_date() {
        let trade = TradeRecord {
            entry_date: Some("2025-01-10".into()),
            ..TradeRecord::default()
        };
        assert_eq!(trade.chronological_key(), "2025-01-10");
        assert_eq!(TradeRecord::default().chronological_key(), "");
        assert!(TradeRecord::default().close_date().is_err());
    }

    #[test]
    fn close_date_accepts_either_time_separator() {
        let closed_at = |date: &str| TradeRecord {
            exit_date: Some(date.to_string()),
            ..TradeRecord::default()
        };
        let expected = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();

        assert_eq!(closed_at("2025-03-04").close_date().unwrap(), expected);
        assert_eq!(closed_at("2025-03-04T15:30:00").close_date().unwrap(), expected);
        assert_eq!(closed_at("2025-03-04 15:30:00").close_date().unwrap(), expected);
        assert!(closed_at("2025-03-04xyz").close_date().is_err());
        assert!(closed_at("03/04/2025").close_date().is_err());
    }

    #[test]
    fn initial_capital_nets_cash_flows() {
        let json = r#"{
            "starting_balance": 1000,
            "deposits": [{"amount": 500, "date": "2025-01-01"}, {"amount": "250"}],
            "withdrawals": [{"amount": 100, "date": "2025-02-01"}]
        }"#;
        let account: AccountConfig = serde_json::from_str(json).unwrap();

        assert_eq!(account.total_deposits(), 750.0);
        assert_eq!(account.total_withdrawals(), 100.0);
        assert_eq!(account.initial_capital(), 1650.0);
        assert!(account.validate().is_ok());
    }

    #[test]
    fn negative_balances_fail_validation() {
        assert!(AccountConfig::new(-1.0).validate().is_err());
    }
}

use crate::error::StoreError;
use crate::store::{JournalStore, TradesIndex};
use analytics::AnalyticsReport;
use core_types::{AccountConfig, TradeRecord};
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// An in-process `JournalStore`, useful for embedding the pipeline and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trades: Option<Vec<TradeRecord>>,
    account: Option<AccountConfig>,
    saved: Mutex<Vec<AnalyticsReport>>,
}

impl MemoryStore {
    /// A store holding `trades` and no account configuration.
    pub fn new(trades: Vec<TradeRecord>) -> Self {
        Self {
            trades: Some(trades),
            ..Self::default()
        }
    }

    /// A store without a trades index, as before the journal is first parsed.
    pub fn without_index() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: AccountConfig) -> Self {
        self.account = Some(account);
        self
    }

    /// Every report saved so far, oldest first.
    pub fn saved_reports(&self) -> Vec<AnalyticsReport> {
        self.saved.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl JournalStore for MemoryStore {
    fn load_trades_index(&self) -> Result<TradesIndex, StoreError> {
        let trades = self
            .trades
            .clone()
            .ok_or_else(|| StoreError::TradesIndexNotFound(PathBuf::from("<memory>")))?;
        Ok(TradesIndex { trades, statistics: JsonValue::Null })
    }

    fn load_account_config(&self) -> Result<AccountConfig, StoreError> {
        Ok(self.account.clone().unwrap_or_default())
    }

    fn save_analytics(&self, report: &AnalyticsReport) -> Result<(), StoreError> {
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report.clone());
        Ok(())
    }
}

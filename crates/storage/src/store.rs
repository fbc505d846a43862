use crate::error::StoreError;
use analytics::AnalyticsReport;
use core_types::{AccountConfig, TradeRecord};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// The journal's trade index: every closed trade plus whatever summary
/// statistics the parser stored alongside them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradesIndex {
    pub trades: Vec<TradeRecord>,
    pub statistics: JsonValue,
}

#[derive(Deserialize)]
struct RawTradesIndex {
    #[serde(default)]
    trades: Option<Vec<JsonValue>>,
    #[serde(default)]
    statistics: JsonValue,
}

impl TradesIndex {
    /// Decodes an index document. Entries that are not trade records at all
    /// are skipped with a warning; the rest of the index still loads.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let raw: RawTradesIndex = serde_json::from_str(text)?;
        let entries = raw.trades.unwrap_or_default();
        let total = entries.len();

        let trades: Vec<TradeRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value::<TradeRecord>(entry) {
                Ok(trade) => Some(trade),
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "Skipping unreadable trade entry.");
                    None
                }
            })
            .collect();

        if trades.len() < total {
            tracing::warn!(skipped = total - trades.len(), total, "Some trade entries were skipped.");
        }

        Ok(Self { trades, statistics: raw.statistics })
    }
}

/// The persistence collaborator the analytics pipeline reads from and writes to.
///
/// Implementations must hand back a consistent snapshot: the trades and the
/// account configuration loaded for one run belong together.
pub trait JournalStore {
    /// Loads the trade index. A missing index is an error, never an empty journal.
    fn load_trades_index(&self) -> Result<TradesIndex, StoreError>;

    /// Loads the account configuration, falling back to
    /// `AccountConfig::default()` when none has been recorded yet.
    fn load_account_config(&self) -> Result<AccountConfig, StoreError>;

    /// Stores a computed report, replacing the previous one.
    fn save_analytics(&self, report: &AnalyticsReport) -> Result<(), StoreError>;
}

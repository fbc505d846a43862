use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a freshly stored analytics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsUpdated {
    pub generated_at: DateTime<Utc>,
    pub total_trades: usize,
    pub portfolio_value: f64,
}

/// Notifications emitted by the journal.
///
/// Serialized with `#[serde(tag = "type", content = "payload")]`, so an update
/// looks like `{"type": "AnalyticsUpdated", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum JournalEvent {
    /// The analytics report was recomputed and saved.
    AnalyticsUpdated(AnalyticsUpdated),
}

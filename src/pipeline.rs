use analytics::{AnalyticsEngine, AnalyticsReport};
use events::{AnalyticsUpdated, EventSink, JournalEvent, notify};
use storage::{JournalStore, StoreError};

/// Recomputes the journal's analytics from the store's current snapshot.
///
/// Loads the account configuration and trades, runs the engine, saves the
/// report exactly once, then announces the update on `sink`. Store failures
/// propagate; a failed notification does not.
pub fn refresh_analytics(
    store: &dyn JournalStore,
    engine: &AnalyticsEngine,
    sink: &dyn EventSink,
) -> Result<AnalyticsReport, StoreError> {
    let account = store.load_account_config()?;
    let index = store.load_trades_index()?;

    let report = engine.calculate(&index.trades, &account);
    store.save_analytics(&report)?;

    notify(
        sink,
        JournalEvent::AnalyticsUpdated(AnalyticsUpdated {
            generated_at: report.generated_at,
            total_trades: report.total_trades,
            portfolio_value: report.account.portfolio_value,
        }),
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{AccountConfig, TradeRecord};
    use events::NoopSink;
    use storage::MemoryStore;
    use tokio::sync::broadcast;

    fn trade(date: &str, pnl_usd: f64) -> TradeRecord {
        TradeRecord {
            exit_date: Some(date.to_string()),
            pnl_usd,
            ..TradeRecord::default()
        }
    }

    #[test]
    fn saves_once_and_announces_the_update() {
        let store = MemoryStore::new(vec![trade("2025-01-02", 50.0), trade("2025-01-03", -20.0)])
            .with_account(AccountConfig::new(1000.0));
        let (tx, mut rx) = broadcast::channel(4);

        let report = refresh_analytics(&store, &AnalyticsEngine::new(), &tx).unwrap();

        let saved = store.saved_reports();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], report);

        match rx.try_recv().unwrap() {
            JournalEvent::AnalyticsUpdated(update) => {
                assert_eq!(update.total_trades, 2);
                assert_eq!(update.portfolio_value, 1030.0);
                assert_eq!(update.generated_at, report.generated_at);
            }
        }
    }

    #[test]
    fn missing_index_fails_without_saving() {
        let store = MemoryStore::without_index();
        let result = refresh_analytics(&store, &AnalyticsEngine::new(), &NoopSink);

        assert!(matches!(result, Err(StoreError::TradesIndexNotFound(_))));
        assert!(store.saved_reports().is_empty());
    }

    #[test]
    fn empty_journal_still_produces_a_report() {
        let store = MemoryStore::new(Vec::new());
        let report = refresh_analytics(&store, &AnalyticsEngine::new(), &NoopSink).unwrap();

        assert_eq!(report.total_trades, 0);
        assert_eq!(report.account.portfolio_value, 0.0);
        assert_eq!(store.saved_reports().len(), 1);
    }

    #[test]
    fn undelivered_notification_does_not_fail_the_run() {
        let store = MemoryStore::new(vec![trade("2025-01-02", 5.0)]);
        let (tx, rx) = broadcast::channel::<JournalEvent>(1);
        drop(rx);

        assert!(refresh_analytics(&store, &AnalyticsEngine::new(), &tx).is_ok());
    }
}

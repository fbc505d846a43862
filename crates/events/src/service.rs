use crate::messages::JournalEvent;
use tokio::sync::broadcast;

/// A long-running service that listens to the broadcast channel of
/// `JournalEvent`s and records each one in the log.
///
/// Returns the number of events handled once the channel closes.
pub async fn run_event_logger(mut event_rx: broadcast::Receiver<JournalEvent>) -> usize {
    tracing::debug!("Event logger started.");
    let mut handled = 0;

    loop {
        match event_rx.recv().await {
            Ok(JournalEvent::AnalyticsUpdated(update)) => {
                handled += 1;
                tracing::info!(
                    generated_at = %update.generated_at,
                    total_trades = update.total_trades,
                    portfolio_value = update.portfolio_value,
                    "Analytics updated."
                );
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("Event logger lagged, skipped {} events.", n);
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::debug!("Event channel closed. Event logger shutting down.");
                break;
            }
        }
    }

    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::AnalyticsUpdated;
    use crate::sink::{EventSink, NoopSink, notify};
    use chrono::Utc;

    fn update() -> JournalEvent {
        JournalEvent::AnalyticsUpdated(AnalyticsUpdated {
            generated_at: Utc::now(),
            total_trades: 1,
            portfolio_value: 10.0,
        })
    }

    #[tokio::test]
    async fn logger_drains_until_channel_closes() {
        let (tx, rx) = broadcast::channel(8);
        let logger = tokio::spawn(run_event_logger(rx));

        tx.publish(update()).unwrap();
        tx.publish(update()).unwrap();
        drop(tx);

        assert_eq!(logger.await.unwrap(), 2);
    }

    #[test]
    fn publishing_without_listeners_is_reported_but_not_fatal() {
        let (tx, rx) = broadcast::channel::<JournalEvent>(1);
        drop(rx);

        assert!(tx.publish(update()).is_err());
        notify(&tx, update());
        assert!(NoopSink.publish(update()).is_ok());
    }
}

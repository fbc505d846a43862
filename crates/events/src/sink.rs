use crate::error::EventsError;
use crate::messages::JournalEvent;
use tokio::sync::broadcast;

/// Somewhere to deliver journal events. Delivery is fire-and-forget: callers
/// log a failure and carry on.
pub trait EventSink {
    fn publish(&self, event: JournalEvent) -> Result<(), EventsError>;
}

impl EventSink for broadcast::Sender<JournalEvent> {
    fn publish(&self, event: JournalEvent) -> Result<(), EventsError> {
        self.send(event).map(|_| ()).map_err(|_| EventsError::NoListeners)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn publish(&self, _event: JournalEvent) -> Result<(), EventsError> {
        Ok(())
    }
}

/// Publishes `event`, logging instead of failing when nobody is listening.
pub fn notify(sink: &dyn EventSink, event: JournalEvent) {
    if let Err(e) = sink.publish(event) {
        tracing::debug!(error = %e, "Journal event was not delivered.");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventsError {
    #[error("No listeners are subscribed to journal events")]
    NoListeners,
}

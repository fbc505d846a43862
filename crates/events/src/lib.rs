//! # Journal Events
//!
//! Notifications the journal emits after its state changes, the `EventSink`
//! seam publishers write to, and a listener service that logs them.
//!
//! Nothing here influences a computation's result. Publishing is
//! fire-and-forget.

// Declare the modules that make up this crate.
pub mod error;
pub mod messages;
pub mod service;
pub mod sink;

// Re-export the core types to provide a clean public API.
pub use error::EventsError;
pub use messages::{AnalyticsUpdated, JournalEvent};
pub use service::run_event_logger;
pub use sink::{EventSink, NoopSink, notify};

//! # Journal Core Types
//!
//! The foundational data structures shared by every other crate: the trade
//! record as stored in the journal, the account configuration, and the tag
//! categories trades are grouped under.
//!
//! All decoding here is deliberately forgiving. Malformed numeric fields
//! become zero and tag fields are resolved to a single [`Category`] at
//! ingestion, so downstream code never has to re-check their shape.

pub mod enums;
pub mod error;
pub mod lenient;
pub mod structs;
pub mod tags;

// Re-export the core types to provide a clean public API.
pub use enums::{Direction, TagField};
pub use error::CoreError;
pub use structs::{AccountConfig, CashFlow, TradeRecord};
pub use tags::{Category, TagValue, UNCLASSIFIED};

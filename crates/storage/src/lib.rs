//! # Journal Storage
//!
//! The persistence side of the journal. It loads the trade index and account
//! configuration the analytics engine works from, and stores the report it
//! produces.
//!
//! ## Public API
//!
//! - `JournalStore`: The seam the pipeline is written against.
//! - `JsonFileStore`: The JSON documents under the journal's data directory.
//! - `MemoryStore`: An in-process store for embedding and tests.
//! - `StoreError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod json_file;
pub mod memory;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{JournalStore, TradesIndex};

//! # Journal Analytics Engine
//!
//! This crate derives the performance statistics of a trading journal from its
//! closed trades and account configuration.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no knowledge of where trades come from. It
//!   depends only on `core-types`.
//! - **Stateless Calculation:** `AnalyticsEngine` takes a snapshot of trades and
//!   returns a fresh `AnalyticsReport` every time. Nothing is cached between runs.
//! - **No Degenerate Numbers:** Empty input, zero capital and zero variance all
//!   produce explicit zeros, never `NaN` or infinity.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: Sorts the trades once and runs every calculation over them.
//! - `AnalyticsReport`: The complete result handed to the persistence layer.
//! - The individual calculations (`stats`, `drawdown`, `returns`, `r_multiple`,
//!   `tags`, `equity`, `breakdowns`) are public for callers that need a single
//!   metric.

// Declare the modules that constitute this crate.
pub mod breakdowns;
pub mod classifier;
pub mod drawdown;
pub mod engine;
pub mod equity;
pub mod error;
pub mod precision;
pub mod r_multiple;
pub mod report;
pub mod returns;
pub mod stats;
pub mod tags;

// Re-export the key components to create a clean, public-facing API.
pub use breakdowns::{DayPerformance, StrategyWinLoss, TickerPerformance};
pub use classifier::{Outcome, TradeTally, classify};
pub use drawdown::DrawdownSeries;
pub use engine::AnalyticsEngine;
pub use equity::EquityCurve;
pub use error::AnalyticsError;
pub use r_multiple::RMultipleDistribution;
pub use report::{AccountSnapshot, AnalyticsReport, ExcursionAnalysis, ReturnsSummary};
pub use returns::ReturnsMetrics;
pub use stats::{MAX_PROFIT_FACTOR, Streaks};
pub use tags::{TagBreakdown, TagStats};

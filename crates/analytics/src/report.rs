use crate::breakdowns::{DayPerformance, StrategyWinLoss, TickerPerformance};
use crate::drawdown::DrawdownSeries;
use crate::equity::EquityCurve;
use crate::r_multiple::RMultipleDistribution;
use crate::returns::ReturnsMetrics;
use crate::tags::TagBreakdown;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The complete analytics record for a journal.
///
/// Every field except `generated_at` is a pure function of the trades and the
/// account configuration it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    // I. Trade Counts
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub breakeven_trades: usize,
    pub win_rate: f64,
    pub total_pnl: f64,

    // II. Aggregate Statistics
    pub expectancy: f64,
    pub profit_factor: f64,
    pub max_win_streak: u32,
    pub max_loss_streak: u32,
    pub kelly_criterion: f64,
    pub sharpe_ratio: f64,

    // III. Drawdown
    pub max_drawdown: f64,
    pub max_drawdown_percent: f64,
    pub drawdown_series: DrawdownSeries,

    // IV. Distributions and Breakdowns
    pub r_multiple_distribution: RMultipleDistribution,
    pub mae_mfe_analysis: ExcursionAnalysis,
    pub by_strategy: TagBreakdown,
    pub by_setup: TagBreakdown,
    pub by_session: TagBreakdown,

    // V. Chart Data
    pub equity_curve: EquityCurve,
    pub win_loss_by_strategy: Vec<StrategyWinLoss>,
    pub performance_by_day: Vec<DayPerformance>,
    pub ticker_performance: Vec<TickerPerformance>,

    // VI. Account
    pub returns: ReturnsSummary,
    pub account: AccountSnapshot,

    pub generated_at: DateTime<Utc>,
}

impl AnalyticsReport {
    /// An all-zero report for a journal with no trades.
    pub fn empty(account: AccountSnapshot, generated_at: DateTime<Utc>) -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            breakeven_trades: 0,
            win_rate: 0.0,
            total_pnl: 0.0,
            expectancy: 0.0,
            profit_factor: 0.0,
            max_win_streak: 0,
            max_loss_streak: 0,
            kelly_criterion: 0.0,
            sharpe_ratio: 0.0,
            max_drawdown: 0.0,
            max_drawdown_percent: 0.0,
            drawdown_series: DrawdownSeries::default(),
            r_multiple_distribution: RMultipleDistribution::default(),
            mae_mfe_analysis: ExcursionAnalysis::default(),
            by_strategy: TagBreakdown::new(),
            by_setup: TagBreakdown::new(),
            by_session: TagBreakdown::new(),
            equity_curve: EquityCurve::default(),
            win_loss_by_strategy: Vec::new(),
            performance_by_day: Vec::new(),
            ticker_performance: Vec::new(),
            returns: ReturnsSummary::default(),
            account,
            generated_at,
        }
    }

    /// Compares every metric, ignoring when the reports were generated.
    pub fn same_metrics(&self, other: &Self) -> bool {
        let mut other = other.clone();
        other.generated_at = self.generated_at;
        *self == other
    }
}

/// The returns block of the report. The drawdown percentage is reported at
/// the top level instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnsSummary {
    pub total_return_percent: f64,
    pub avg_return_percent: f64,
    pub avg_risk_percent: f64,
    pub avg_position_size_percent: f64,
}

impl From<&ReturnsMetrics> for ReturnsSummary {
    fn from(metrics: &ReturnsMetrics) -> Self {
        Self {
            total_return_percent: metrics.total_return_percent,
            avg_return_percent: metrics.avg_return_percent,
            avg_risk_percent: metrics.avg_risk_percent,
            avg_position_size_percent: metrics.avg_position_size_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub starting_balance: f64,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub total_pnl: f64,
    pub portfolio_value: f64,
}

/// Maximum adverse/favorable excursion. Trade records carry no intraday
/// high/low prices, so this is always reported as unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcursionAnalysis {
    pub available: bool,
    pub message: String,
    pub mae_avg: f64,
    pub mfe_avg: f64,
    pub note: String,
}

impl Default for ExcursionAnalysis {
    fn default() -> Self {
        Self {
            available: false,
            message: "MAE/MFE analysis requires intraday price data. It becomes available once \
                      intraday high/low prices are tracked for each trade."
                .to_string(),
            mae_avg: 0.0,
            mfe_avg: 0.0,
            note: "Add 'intraday_high' and 'intraday_low' fields to trade entries to enable this metric."
                .to_string(),
        }
    }
}

use crate::breakdowns::{performance_by_day, ticker_performance, win_loss_by_strategy};
use crate::classifier::TradeTally;
use crate::drawdown::drawdown_series;
use crate::equity::equity_curve;
use crate::error::AnalyticsError;
use crate::precision::round_to;
use crate::r_multiple::r_multiple_distribution;
use crate::report::{AccountSnapshot, AnalyticsReport, ExcursionAnalysis, ReturnsSummary};
use crate::returns::returns_metrics;
use crate::stats::{expectancy, kelly_criterion, profit_factor, sharpe_ratio, streaks};
use crate::tags::aggregate_by_tag;
use chrono::{DateTime, Utc};
use core_types::{AccountConfig, TagField, TradeRecord};

/// A stateless calculator for deriving journal analytics from closed trades.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {
    risk_free_rate: f64,
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that subtracts `rate` (per-trade percent) from the
    /// mean return when computing the Sharpe ratio.
    pub fn with_risk_free_rate(rate: f64) -> Result<Self, AnalyticsError> {
        if !rate.is_finite() {
            return Err(AnalyticsError::InvalidParameter(
                "risk_free_rate".to_string(),
                format!("must be a finite number, got {rate}"),
            ));
        }
        Ok(Self { risk_free_rate: rate })
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Computes the full report, stamped with the current time.
    pub fn calculate(&self, trades: &[TradeRecord], account: &AccountConfig) -> AnalyticsReport {
        self.calculate_at(trades, account, Utc::now())
    }

    /// The main entry point for calculating analytics.
    ///
    /// # Arguments
    ///
    /// * `trades` - Every closed trade in the journal, in any order.
    /// * `account` - Starting balance and cash flows.
    /// * `generated_at` - The timestamp recorded on the report.
    ///
    /// Trades are sorted once by close date, so every order-sensitive metric
    /// sees the same sequence.
    pub fn calculate_at(
        &self,
        trades: &[TradeRecord],
        account: &AccountConfig,
        generated_at: DateTime<Utc>,
    ) -> AnalyticsReport {
        if trades.is_empty() {
            tracing::info!("No trades in journal; producing an empty report.");
            return AnalyticsReport::empty(account_snapshot(account, 0.0), generated_at);
        }

        tracing::info!(trades = trades.len(), "Calculating journal analytics.");

        let mut sorted = trades.to_vec();
        sorted.sort_by(|a, b| a.chronological_key().cmp(b.chronological_key()));

        let tally = TradeTally::from_trades(&sorted);
        let streaks = streaks(&sorted);
        let drawdown_series = drawdown_series(&sorted);
        let returns = returns_metrics(&sorted, account);

        let report = AnalyticsReport {
            total_trades: tally.total,
            winning_trades: tally.wins,
            losing_trades: tally.losses,
            breakeven_trades: tally.breakevens(),
            win_rate: round_to(tally.win_rate() * 100.0, 2),
            total_pnl: round_to(tally.net_pnl, 2),
            expectancy: expectancy(&sorted),
            profit_factor: profit_factor(&sorted),
            max_win_streak: streaks.max_win_streak,
            max_loss_streak: streaks.max_loss_streak,
            kelly_criterion: kelly_criterion(&sorted),
            sharpe_ratio: sharpe_ratio(&sorted, self.risk_free_rate),
            max_drawdown: drawdown_series.max_drawdown(),
            max_drawdown_percent: returns.max_drawdown_percent,
            drawdown_series,
            r_multiple_distribution: r_multiple_distribution(&sorted),
            mae_mfe_analysis: ExcursionAnalysis::default(),
            by_strategy: aggregate_by_tag(&sorted, TagField::Strategy),
            by_setup: aggregate_by_tag(&sorted, TagField::Setup),
            by_session: aggregate_by_tag(&sorted, TagField::Session),
            equity_curve: equity_curve(&sorted),
            win_loss_by_strategy: win_loss_by_strategy(&sorted),
            performance_by_day: performance_by_day(&sorted),
            ticker_performance: ticker_performance(&sorted),
            returns: ReturnsSummary::from(&returns),
            account: account_snapshot(account, tally.net_pnl),
            generated_at,
        };

        tracing::debug!(
            expectancy = report.expectancy,
            profit_factor = report.profit_factor,
            kelly = report.kelly_criterion,
            sharpe = report.sharpe_ratio,
            max_drawdown = report.max_drawdown,
            "Analytics calculated."
        );

        report
    }
}

fn account_snapshot(account: &AccountConfig, total_pnl: f64) -> AccountSnapshot {
    let total_deposits = account.total_deposits();
    let total_withdrawals = account.total_withdrawals();
    let portfolio_value = account.starting_balance + total_deposits - total_withdrawals + total_pnl;

    AccountSnapshot {
        starting_balance: round_to(account.starting_balance, 2),
        total_deposits: round_to(total_deposits, 2),
        total_withdrawals: round_to(total_withdrawals, 2),
        total_pnl: round_to(total_pnl, 2),
        portfolio_value: round_to(portfolio_value, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_risk_free_rate() {
        assert!(AnalyticsEngine::with_risk_free_rate(f64::NAN).is_err());
        assert_eq!(AnalyticsEngine::with_risk_free_rate(0.5).unwrap().risk_free_rate(), 0.5);
    }

    #[test]
    fn empty_report_still_snapshots_the_account() {
        let account = AccountConfig::new(2500.0);
        let report = AnalyticsEngine::new().calculate(&[], &account);

        assert_eq!(report.total_trades, 0);
        assert_eq!(report.account.starting_balance, 2500.0);
        assert_eq!(report.account.portfolio_value, 2500.0);
    }

    #[test]
    fn sorts_by_exit_date_before_order_sensitive_metrics() {
        let trade = |date: &str, pnl_usd: f64| TradeRecord {
            exit_date: Some(date.to_string()),
            pnl_usd,
            ..TradeRecord::default()
        };
        // Chronologically: win, win, loss
        let trades = [trade("2025-01-03", -10.0), trade("2025-01-01", 5.0), trade("2025-01-02", 5.0)];
        let report = AnalyticsEngine::new().calculate(&trades, &AccountConfig::new(100.0));

        assert_eq!(report.max_win_streak, 2);
        assert_eq!(report.drawdown_series.labels, vec!["01/01", "01/02", "01/03"]);
        assert_eq!(report.drawdown_series.values, vec![0.0, 0.0, -10.0]);
        assert_eq!(report.equity_curve.labels, vec!["2025-01-01", "2025-01-02", "2025-01-03"]);
        assert_eq!(report.equity_curve.values, vec![5.0, 10.0, 0.0]);
    }
}

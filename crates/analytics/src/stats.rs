//! Aggregate statistics over an ordered list of trades.

use crate::classifier::{Outcome, TradeTally, classify};
use crate::precision::round_to;
use core_types::TradeRecord;
use serde::{Deserialize, Serialize};

/// Reported instead of an infinite profit factor when nothing was lost.
pub const MAX_PROFIT_FACTOR: f64 = 999.99;

/// Longest consecutive runs of winning and losing trades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub max_win_streak: u32,
    pub max_loss_streak: u32,
}

/// Expected P&L per trade: `winRate * avgWin - lossRate * avgLoss`.
pub fn expectancy(trades: &[TradeRecord]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let tally = TradeTally::from_trades(trades);
    let expectancy = tally.win_rate() * tally.avg_win() - tally.loss_rate() * tally.avg_loss();
    round_to(expectancy, 2)
}

/// Gross profit over gross loss, capped at [`MAX_PROFIT_FACTOR`].
pub fn profit_factor(trades: &[TradeRecord]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let tally = TradeTally::from_trades(trades);
    let gross_loss = tally.gross_loss.abs();

    if gross_loss == 0.0 {
        return if tally.gross_profit == 0.0 { 0.0 } else { MAX_PROFIT_FACTOR };
    }

    round_to(tally.gross_profit / gross_loss, 2)
}

/// Longest win and loss runs. Trades must be in chronological order.
///
/// A breakeven trade ends both runs.
pub fn streaks(trades: &[TradeRecord]) -> Streaks {
    let mut current_win = 0u32;
    let mut current_loss = 0u32;
    let mut result = Streaks::default();

    for trade in trades {
        match classify(trade) {
            Outcome::Win => {
                current_win += 1;
                current_loss = 0;
                result.max_win_streak = result.max_win_streak.max(current_win);
            }
            Outcome::Loss => {
                current_loss += 1;
                current_win = 0;
                result.max_loss_streak = result.max_loss_streak.max(current_loss);
            }
            Outcome::Breakeven => {
                current_win = 0;
                current_loss = 0;
            }
        }
    }

    result
}

/// Kelly criterion `W - (1 - W) / R` as a percentage with one decimal.
///
/// Zero unless the trades contain at least one win and one loss.
pub fn kelly_criterion(trades: &[TradeRecord]) -> f64 {
    let tally = TradeTally::from_trades(trades);
    if tally.wins == 0 || tally.losses == 0 {
        return 0.0;
    }

    let avg_loss = tally.avg_loss();
    if avg_loss == 0.0 {
        return 0.0;
    }

    let win_rate = tally.win_rate();
    let payoff_ratio = tally.avg_win() / avg_loss;
    let kelly = win_rate - (1.0 - win_rate) / payoff_ratio;

    round_to(kelly * 100.0, 1)
}

/// Sharpe ratio over per-trade percentage returns, using the population
/// standard deviation.
pub fn sharpe_ratio(trades: &[TradeRecord], risk_free_rate: f64) -> f64 {
    if trades.len() < 2 {
        return 0.0;
    }

    let returns: Vec<f64> = trades.iter().map(|t| t.pnl_percent).collect();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return 0.0;
    }

    round_to((mean - risk_free_rate) / std_dev, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(pnl_usd: f64) -> TradeRecord {
        TradeRecord { pnl_usd, ..TradeRecord::default() }
    }

    fn returns(pcts: &[f64]) -> Vec<TradeRecord> {
        pcts.iter()
            .map(|&pnl_percent| TradeRecord { pnl_percent, pnl_usd: pnl_percent, ..TradeRecord::default() })
            .collect()
    }

    #[test]
    fn expectancy_weights_by_rates() {
        let trades = [trade(500.0), trade(-250.0), trade(250.0)];
        assert_eq!(expectancy(&trades), 166.67);
        assert_eq!(expectancy(&[]), 0.0);
    }

    #[test]
    fn breakevens_dilute_expectancy() {
        let trades = [trade(100.0), trade(0.0)];
        assert_eq!(expectancy(&trades), 50.0);
    }

    #[test]
    fn profit_factor_edge_cases() {
        assert_eq!(profit_factor(&[]), 0.0);
        assert_eq!(profit_factor(&[trade(0.0), trade(0.0)]), 0.0);
        assert_eq!(profit_factor(&[trade(10.0), trade(5.0)]), MAX_PROFIT_FACTOR);
        assert_eq!(profit_factor(&[trade(-10.0)]), 0.0);
        assert_eq!(profit_factor(&[trade(100.0), trade(-30.0)]), 3.33);
    }

    #[test]
    fn breakeven_resets_both_streaks() {
        let trades = [trade(1.0), trade(1.0), trade(0.0), trade(1.0)];
        assert_eq!(streaks(&trades).max_win_streak, 2);

        let trades = [trade(-1.0), trade(0.0), trade(-1.0), trade(-1.0), trade(2.0)];
        let result = streaks(&trades);
        assert_eq!(result.max_loss_streak, 2);
        assert_eq!(result.max_win_streak, 1);
    }

    #[test]
    fn kelly_uses_one_decimal_percent() {
        // W = 2/3, R = 375 / 250 = 1.5 -> 0.6667 - 0.3333 / 1.5 = 0.4444
        let trades = [trade(500.0), trade(-250.0), trade(250.0)];
        assert_eq!(kelly_criterion(&trades), 44.4);
    }

    #[test]
    fn kelly_needs_wins_and_losses() {
        assert_eq!(kelly_criterion(&[trade(-20.0)]), 0.0);
        assert_eq!(kelly_criterion(&[trade(20.0), trade(10.0)]), 0.0);
        assert_eq!(kelly_criterion(&[]), 0.0);
    }

    #[test]
    fn sharpe_uses_population_deviation() {
        // mean 2, population std dev 1
        assert_eq!(sharpe_ratio(&returns(&[1.0, 3.0]), 0.0), 2.0);
        assert_eq!(sharpe_ratio(&returns(&[1.0, 3.0]), 1.0), 1.0);
    }

    #[test]
    fn sharpe_degenerate_inputs_are_zero() {
        assert_eq!(sharpe_ratio(&returns(&[5.0]), 0.0), 0.0);
        assert_eq!(sharpe_ratio(&returns(&[2.0, 2.0, 2.0]), 0.0), 0.0);
        assert_eq!(sharpe_ratio(&[], 0.0), 0.0);
    }
}

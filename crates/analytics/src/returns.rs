//! Percentage metrics normalized against the account's initial capital.

use crate::classifier::{TradeTally, pnl};
use crate::drawdown::max_drawdown;
use crate::precision::round_to;
use core_types::{AccountConfig, TradeRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnsMetrics {
    pub total_return_percent: f64,
    /// Four decimals rather than two: a single trade's share of the account is small.
    pub avg_return_percent: f64,
    pub max_drawdown_percent: f64,
    pub avg_risk_percent: f64,
    pub avg_position_size_percent: f64,
}

/// Computes the returns metrics. Trades must be in chronological order,
/// since position size is measured against the balance at the time.
///
/// With no trades or no positive initial capital every metric is zero.
pub fn returns_metrics(trades: &[TradeRecord], account: &AccountConfig) -> ReturnsMetrics {
    let initial_capital = account.initial_capital();
    if trades.is_empty() || initial_capital <= 0.0 {
        return ReturnsMetrics::default();
    }

    let tally = TradeTally::from_trades(trades);
    let trade_count = trades.len() as f64;
    let as_percent = |amount: f64| amount / initial_capital * 100.0;

    let avg_risk_percent = if tally.losses > 0 {
        as_percent(tally.avg_loss())
    } else {
        0.0
    };

    ReturnsMetrics {
        total_return_percent: round_to(as_percent(tally.net_pnl), 2),
        avg_return_percent: round_to(as_percent(tally.net_pnl / trade_count), 4),
        max_drawdown_percent: round_to(as_percent(max_drawdown(trades)), 2),
        avg_risk_percent: round_to(avg_risk_percent, 3),
        avg_position_size_percent: round_to(
            avg_position_size_percent(trades, initial_capital),
            2,
        ),
    }
}

/// Mean of each position's notional value as a share of the running balance.
///
/// The balance starts at `initial_capital` and absorbs each trade's P&L after
/// that trade is measured. Trades taken while the balance is not positive, or
/// with no notional value, contribute zero but still count toward the mean.
fn avg_position_size_percent(trades: &[TradeRecord], initial_capital: f64) -> f64 {
    let mut balance = initial_capital;
    let mut total_percent = 0.0;

    for trade in trades {
        let position_value = (trade.entry_price * trade.position_size).abs();
        if balance > 0.0 && position_value > 0.0 {
            total_percent += position_value / balance * 100.0;
        }
        balance += pnl(trade);
    }

    total_percent / trades.len() as f64
}

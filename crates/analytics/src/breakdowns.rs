//! Chart-ready groupings of the journal: wins and losses per strategy,
//! average P&L per weekday, and the best performing tickers.

use crate::classifier::{Outcome, classify, pnl};
use crate::precision::round_to;
use chrono::Datelike;
use core_types::{TagField, TradeRecord};
use serde::{Deserialize, Serialize};

/// Weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// At most this many tickers are reported.
pub const MAX_TICKERS: usize = 20;

/// The label for trades recorded without a ticker.
pub const UNKNOWN_TICKER: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyWinLoss {
    pub strategy: String,
    pub wins: usize,
    pub losses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPerformance {
    pub day: String,
    pub trades: usize,
    pub avg_pnl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerPerformance {
    pub ticker: String,
    pub trades: usize,
    pub total_pnl: f64,
}

/// Win and loss counts per strategy, busiest strategy first. Breakevens are
/// not counted, and strategies that tie keep the order they first appear in.
pub fn win_loss_by_strategy(trades: &[TradeRecord]) -> Vec<StrategyWinLoss> {
    let mut rows: Vec<StrategyWinLoss> = Vec::new();

    for trade in trades {
        let strategy = trade.category(TagField::Strategy).as_str();
        let index = match rows.iter().position(|row| row.strategy == strategy) {
            Some(index) => index,
            None => {
                rows.push(StrategyWinLoss {
                    strategy: strategy.to_string(),
                    wins: 0,
                    losses: 0,
                });
                rows.len() - 1
            }
        };

        match classify(trade) {
            Outcome::Win => rows[index].wins += 1,
            Outcome::Loss => rows[index].losses += 1,
            Outcome::Breakeven => {}
        }
    }

    rows.sort_by(|a, b| (b.wins + b.losses).cmp(&(a.wins + a.losses)));
    rows
}

/// Average P&L for each weekday that has at least one trade, Monday first.
/// Trades whose close date doesn't parse are left out.
pub fn performance_by_day(trades: &[TradeRecord]) -> Vec<DayPerformance> {
    let mut totals = [(0.0_f64, 0_usize); 7];

    for trade in trades {
        let Ok(date) = trade.close_date() else {
            tracing::debug!(date = ?trade.trade_date(), "Skipping trade without a usable date.");
            continue;
        };
        let slot = &mut totals[date.weekday().num_days_from_monday() as usize];
        slot.0 += pnl(trade);
        slot.1 += 1;
    }

    WEEKDAYS
        .iter()
        .zip(totals)
        .filter(|(_, (_, count))| *count > 0)
        .map(|(day, (total, count))| DayPerformance {
            day: day.to_string(),
            trades: count,
            avg_pnl: round_to(total / count as f64, 2),
        })
        .collect()
}

/// Total P&L per ticker, most profitable first, capped at [`MAX_TICKERS`].
pub fn ticker_performance(trades: &[TradeRecord]) -> Vec<TickerPerformance> {
    let mut rows: Vec<TickerPerformance> = Vec::new();

    for trade in trades {
        let ticker = trade.ticker.as_deref().unwrap_or(UNKNOWN_TICKER);
        match rows.iter_mut().find(|row| row.ticker == ticker) {
            Some(row) => {
                row.trades += 1;
                row.total_pnl += pnl(trade);
            }
            None => rows.push(TickerPerformance {
                ticker: ticker.to_string(),
                trades: 1,
                total_pnl: pnl(trade),
            }),
        }
    }

    // Ranked on the exact totals; rounding happens after.
    rows.sort_by(|a, b| b.total_pnl.total_cmp(&a.total_pnl));
    rows.truncate(MAX_TICKERS);
    for row in &mut rows {
        row.total_pnl = round_to(row.total_pnl, 2);
    }
    rows
}

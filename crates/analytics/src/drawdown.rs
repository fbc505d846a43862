use crate::classifier::pnl;
use crate::precision::round_to;
use core_types::TradeRecord;
use serde::{Deserialize, Serialize};

/// Drawdown after each trade, as parallel chart arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawdownSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl DrawdownSeries {
    /// The deepest point of the series, or `0.0` when it is empty.
    pub fn max_drawdown(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::min)
    }
}

/// Running distance of cumulative P&L below its best level so far, one value
/// per trade. The peak starts at zero, so a losing first trade is already a
/// drawdown.
pub fn running_drawdowns(trades: &[TradeRecord]) -> Vec<f64> {
    let mut cumulative = 0.0;
    let mut peak = 0.0_f64;

    trades
        .iter()
        .map(|trade| {
            cumulative += pnl(trade);
            peak = peak.max(cumulative);
            cumulative - peak
        })
        .collect()
}

/// The most negative running drawdown in currency, unrounded.
pub fn max_drawdown(trades: &[TradeRecord]) -> f64 {
    running_drawdowns(trades).into_iter().fold(0.0, f64::min)
}

/// Builds the chart series. Trades must be in chronological order.
pub fn drawdown_series(trades: &[TradeRecord]) -> DrawdownSeries {
    let labels = trades.iter().map(date_label).collect();
    let values = running_drawdowns(trades)
        .into_iter()
        .map(|dd| round_to(dd, 2))
        .collect();

    DrawdownSeries { labels, values }
}

/// `MM/DD` of the trade's close, or the raw date text when it doesn't parse.
fn date_label(trade: &TradeRecord) -> String {
    match trade.close_date() {
        Ok(date) => date.format("%m/%d").to_string(),
        Err(_) => trade.trade_date().unwrap_or_default().to_string(),
    }
}

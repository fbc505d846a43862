use crate::classifier::pnl;
use crate::precision::round_to;
use core_types::TradeRecord;
use serde::{Deserialize, Serialize};

/// Cumulative realized P&L after each trade, as parallel chart arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityCurve {
    /// `YYYY-MM-DD` of each trade's close.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl EquityCurve {
    /// The last point of the curve, or `0.0` when it is empty.
    pub fn final_value(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }
}

/// Builds the equity curve. Trades must be in chronological order.
///
/// The running total is kept unrounded; only the reported points are rounded.
pub fn equity_curve(trades: &[TradeRecord]) -> EquityCurve {
    let mut running_total = 0.0;
    let mut curve = EquityCurve::default();

    for trade in trades {
        running_total += pnl(trade);
        curve.labels.push(match trade.close_date() {
            Ok(date) => date.format("%Y-%m-%d").to_string(),
            Err(_) => trade.trade_date().unwrap_or_default().to_string(),
        });
        curve.values.push(round_to(running_total, 2));
    }

    curve
}

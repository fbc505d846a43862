use core_types::TradeRecord;

/// The three-way result of a closed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Breakeven,
}

/// Realized P&L of a trade.
pub fn pnl(trade: &TradeRecord) -> f64 {
    trade.pnl_usd
}

/// Classifies a trade by the sign of its P&L. Every metric branches on this
/// and nothing else.
pub fn classify(trade: &TradeRecord) -> Outcome {
    let pnl = pnl(trade);
    if pnl > 0.0 {
        Outcome::Win
    } else if pnl < 0.0 {
        Outcome::Loss
    } else {
        Outcome::Breakeven
    }
}

/// Win/loss counts and P&L sums gathered in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradeTally {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub gross_profit: f64,
    /// Sum of losing P&L, kept negative.
    pub gross_loss: f64,
    pub net_pnl: f64,
}

impl TradeTally {
    pub fn from_trades(trades: &[TradeRecord]) -> Self {
        trades.iter().fold(Self::default(), |mut tally, trade| {
            let pnl = pnl(trade);
            tally.total += 1;
            tally.net_pnl += pnl;
            match classify(trade) {
                Outcome::Win => {
                    tally.wins += 1;
                    tally.gross_profit += pnl;
                }
                Outcome::Loss => {
                    tally.losses += 1;
                    tally.gross_loss += pnl;
                }
                Outcome::Breakeven => {}
            }
            tally
        })
    }

    pub fn breakevens(&self) -> usize {
        self.total - self.wins - self.losses
    }

    /// Fraction of all trades that won; breakevens count toward the total.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.wins as f64 / self.total as f64 }
    }

    pub fn loss_rate(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.losses as f64 / self.total as f64 }
    }

    pub fn avg_win(&self) -> f64 {
        if self.wins == 0 { 0.0 } else { self.gross_profit / self.wins as f64 }
    }

    /// Mean losing P&L as a positive magnitude.
    pub fn avg_loss(&self) -> f64 {
        if self.losses == 0 { 0.0 } else { (self.gross_loss / self.losses as f64).abs() }
    }
}

use crate::classifier::TradeTally;
use crate::precision::round_to;
use crate::stats::expectancy;
use core_types::{TagField, TradeRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for the trades sharing one tag value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagStats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    /// Percent with one decimal, unlike the overall win rate which keeps two.
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    pub expectancy: f64,
}

impl TagStats {
    pub fn from_trades(trades: &[TradeRecord]) -> Self {
        let tally = TradeTally::from_trades(trades);
        let avg_pnl = if tally.total == 0 { 0.0 } else { tally.net_pnl / tally.total as f64 };

        Self {
            total_trades: tally.total,
            winning_trades: tally.wins,
            losing_trades: tally.losses,
            win_rate: round_to(tally.win_rate() * 100.0, 1),
            total_pnl: round_to(tally.net_pnl, 2),
            avg_pnl: round_to(avg_pnl, 2),
            expectancy: expectancy(trades),
        }
    }
}

/// Per-category statistics keyed by tag label.
pub type TagBreakdown = BTreeMap<String, TagStats>;

/// Groups trades by the resolved category of `field` and summarizes each group.
/// Trades keep their relative order within a group.
pub fn aggregate_by_tag(trades: &[TradeRecord], field: TagField) -> TagBreakdown {
    let mut groups: BTreeMap<&str, Vec<TradeRecord>> = BTreeMap::new();
    for trade in trades {
        groups
            .entry(trade.category(field).as_str())
            .or_default()
            .push(trade.clone());
    }

    tracing::debug!(field = field.field_name(), groups = groups.len(), "Aggregated trades by tag.");

    groups
        .into_iter()
        .map(|(label, group)| (label.to_string(), TagStats::from_trades(&group)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Category, TagValue};

    fn tagged(strategy: &str, pnl_usd: f64) -> TradeRecord {
        TradeRecord {
            strategy: Category::from(strategy),
            pnl_usd,
            ..TradeRecord::default()
        }
    }

    #[test]
    fn groups_by_category_with_unclassified_sentinel() {
        let trades = [
            tagged("Breakout", 100.0),
            tagged("Breakout", -50.0),
            tagged("", 20.0),
            tagged("Pullback", 0.0),
        ];
        let breakdown = aggregate_by_tag(&trades, TagField::Strategy);

        assert_eq!(breakdown.len(), 3);
        let breakout = &breakdown["Breakout"];
        assert_eq!(breakout.total_trades, 2);
        assert_eq!(breakout.winning_trades, 1);
        assert_eq!(breakout.losing_trades, 1);
        assert_eq!(breakout.win_rate, 50.0);
        assert_eq!(breakout.total_pnl, 50.0);
        assert_eq!(breakout.avg_pnl, 25.0);
        assert_eq!(breakout.expectancy, 25.0);
        assert_eq!(breakdown["Unclassified"].total_trades, 1);
        assert_eq!(breakdown["Pullback"].win_rate, 0.0);
    }

    #[test]
    fn list_tags_count_only_under_first_entry() {
        let trade = TradeRecord {
            setup_tags: Category::from_tag(Some(&TagValue::List(vec!["Gap".into(), "Momentum".into()]))),
            pnl_usd: 10.0,
            ..TradeRecord::default()
        };
        let breakdown = aggregate_by_tag(&[trade], TagField::Setup);

        assert!(breakdown.contains_key("Gap"));
        assert!(!breakdown.contains_key("Momentum"));
    }

    #[test]
    fn tag_win_rate_rounds_to_one_decimal() {
        let trades = [tagged("A", 1.0), tagged("A", -1.0), tagged("A", -1.0)];
        assert_eq!(aggregate_by_tag(&trades, TagField::Strategy)["A"].win_rate, 33.3);
    }

    #[test]
    fn empty_input_gives_empty_breakdown() {
        assert!(aggregate_by_tag(&[], TagField::Session).is_empty());
    }
}

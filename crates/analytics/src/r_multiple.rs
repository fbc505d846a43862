use crate::precision::round_to;
use core_types::{Direction, TradeRecord};
use serde::{Deserialize, Serialize};

/// Histogram bucket labels, lowest to highest.
pub const R_BUCKET_LABELS: [&str; 7] = [
    "< -2R",
    "-2R to -1R",
    "-1R to 0R",
    "0R to 1R",
    "1R to 2R",
    "2R to 3R",
    "> 3R",
];

/// Trade outcomes measured in units of initial risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RMultipleDistribution {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
    pub avg_r_multiple: f64,
    pub median_r_multiple: f64,
}

impl Default for RMultipleDistribution {
    fn default() -> Self {
        Self {
            labels: R_BUCKET_LABELS.iter().map(|l| l.to_string()).collect(),
            data: vec![0; R_BUCKET_LABELS.len()],
            avg_r_multiple: 0.0,
            median_r_multiple: 0.0,
        }
    }
}

/// The trade's gain as a multiple of the distance from entry to stop.
///
/// `None` when the trade has no stop, no entry price, or a stop on the wrong
/// side of the entry.
pub fn r_multiple(trade: &TradeRecord) -> Option<f64> {
    if trade.stop_loss == 0.0 || trade.entry_price <= 0.0 {
        return None;
    }

    let (risk, gain) = match trade.direction {
        Direction::Long => (
            trade.entry_price - trade.stop_loss,
            trade.exit_price - trade.entry_price,
        ),
        Direction::Short => (
            trade.stop_loss - trade.entry_price,
            trade.entry_price - trade.exit_price,
        ),
    };

    if risk <= 0.0 {
        return None;
    }
    Some(gain / risk)
}

/// Index into [`R_BUCKET_LABELS`]. Inner buckets include their lower bound.
fn bucket_index(r: f64) -> usize {
    if r < -2.0 {
        0
    } else if r < -1.0 {
        1
    } else if r < 0.0 {
        2
    } else if r < 1.0 {
        3
    } else if r < 2.0 {
        4
    } else if r < 3.0 {
        5
    } else {
        6
    }
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Buckets every trade with a usable stop. Trades without one are left out
/// of this distribution only.
pub fn r_multiple_distribution(trades: &[TradeRecord]) -> RMultipleDistribution {
    let mut multiples: Vec<f64> = trades.iter().filter_map(r_multiple).collect();
    let mut distribution = RMultipleDistribution::default();

    if multiples.is_empty() {
        return distribution;
    }

    for &r in &multiples {
        distribution.data[bucket_index(r)] += 1;
    }

    multiples.sort_by(f64::total_cmp);
    let mean = multiples.iter().sum::<f64>() / multiples.len() as f64;

    distribution.avg_r_multiple = round_to(mean, 2);
    distribution.median_r_multiple = round_to(median(&multiples), 2);
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long(entry_price: f64, exit_price: f64, stop_loss: f64) -> TradeRecord {
        TradeRecord {
            direction: Direction::Long,
            entry_price,
            exit_price,
            stop_loss,
            ..TradeRecord::default()
        }
    }

    #[test]
    fn r_multiple_is_direction_aware() {
        assert_eq!(r_multiple(&long(100.0, 110.0, 95.0)), Some(2.0));

        let short = TradeRecord {
            direction: Direction::Short,
            entry_price: 50.0,
            exit_price: 44.0,
            stop_loss: 52.0,
            ..TradeRecord::default()
        };
        assert_eq!(r_multiple(&short), Some(3.0));
    }

    #[test]
    fn unusable_stops_are_skipped() {
        assert_eq!(r_multiple(&long(100.0, 110.0, 0.0)), None);
        assert_eq!(r_multiple(&long(0.0, 110.0, 95.0)), None);
        // stop above a long entry
        assert_eq!(r_multiple(&long(100.0, 110.0, 105.0)), None);
    }

    #[test]
    fn bucket_boundaries_are_left_inclusive() {
        assert_eq!(bucket_index(-2.5), 0);
        assert_eq!(bucket_index(-2.0), 1);
        assert_eq!(bucket_index(-1.0), 2);
        assert_eq!(bucket_index(0.0), 3);
        assert_eq!(bucket_index(1.0), 4);
        assert_eq!(bucket_index(2.0), 5);
        assert_eq!(bucket_index(3.0), 6);
    }

    #[test]
    fn distribution_counts_and_averages() {
        let trades = [
            long(100.0, 110.0, 95.0), // 2R
            long(100.0, 95.0, 95.0),  // -1R
            long(100.0, 130.0, 90.0), // 3R
            long(100.0, 130.0, 0.0),  // no stop
        ];
        let dist = r_multiple_distribution(&trades);

        assert_eq!(dist.data, vec![0, 0, 1, 0, 0, 1, 1]);
        assert_eq!(dist.data.iter().sum::<u32>(), 3);
        assert_eq!(dist.avg_r_multiple, 1.33);
        assert_eq!(dist.median_r_multiple, 2.0);
    }

    #[test]
    fn even_count_median_averages_middle_values() {
        let trades = [long(100.0, 110.0, 95.0), long(100.0, 105.0, 95.0)];
        assert_eq!(r_multiple_distribution(&trades).median_r_multiple, 1.5);
    }

    #[test]
    fn no_qualifying_trades_keeps_fixed_shape() {
        let dist = r_multiple_distribution(&[long(100.0, 110.0, 0.0)]);
        assert_eq!(dist.labels.len(), 7);
        assert_eq!(dist.data, vec![0; 7]);
        assert_eq!(dist.avg_r_multiple, 0.0);
    }
}

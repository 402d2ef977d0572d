//! Risk:reward ratio distribution over fixed ranges.

use serde::Serialize;

use super::outcome::{win_rate, Outcome};
use super::trade::Trade;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRewardBucket {
    pub label: String,
    pub count: usize,
    pub win_rate: f64,
}

// Ascending, non-overlapping; upper bound exclusive, None = unbounded.
const RR_RANGES: [(&str, f64, Option<f64>); 4] = [
    ("<1", f64::NEG_INFINITY, Some(1.0)),
    ("1-2", 1.0, Some(2.0)),
    ("2-3", 2.0, Some(3.0)),
    ("3+", 3.0, None),
];

/// Bucket qualifying trades by realized `rr_ratio`. Trades with no
/// recorded ratio are excluded entirely rather than given an "unknown"
/// bucket; per-bucket `win_rate` covers only that bucket's members.
pub fn compute_rr_distribution(trades: &[Trade]) -> Vec<RiskRewardBucket> {
    let mut counts = [0usize; RR_RANGES.len()];
    let mut wins = [0usize; RR_RANGES.len()];
    let mut losses = [0usize; RR_RANGES.len()];

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        let Some(rr) = trade.rr_ratio else {
            continue;
        };
        let Some(idx) = bucket_index(rr) else {
            continue;
        };

        counts[idx] += 1;
        match Outcome::classify(pnl) {
            Outcome::Win => wins[idx] += 1,
            Outcome::Loss => losses[idx] += 1,
            Outcome::Breakeven => {}
        }
    }

    RR_RANGES
        .iter()
        .enumerate()
        .map(|(i, (label, _, _))| RiskRewardBucket {
            label: label.to_string(),
            count: counts[i],
            win_rate: win_rate(wins[i], losses[i]),
        })
        .collect()
}

fn bucket_index(rr: f64) -> Option<usize> {
    RR_RANGES
        .iter()
        .position(|(_, low, high)| rr >= *low && high.map_or(true, |h| rr < h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::{Direction, TradeStatus};
    use chrono::NaiveDate;

    fn trade_with_rr(rr: Option<f64>, pnl: f64) -> Trade {
        Trade {
            id: "t".into(),
            pair: "EURUSD".into(),
            direction: Direction::Long,
            entry_price: 1.0,
            exit_price: None,
            lot_size: 1.0,
            stop_loss: None,
            take_profit: None,
            pnl: Some(pnl),
            pnl_pips: None,
            rr_ratio: rr,
            commission: 0.0,
            swap: 0.0,
            status: TradeStatus::Closed,
            trade_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            closed_at: None,
            emotion: None,
            confidence: None,
            setup: None,
            mistakes: vec![],
            tags: vec![],
            notes: String::new(),
            screenshot_url: None,
        }
    }

    #[test]
    fn distribution_has_four_fixed_buckets() {
        let buckets = compute_rr_distribution(&[]);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].label, "<1");
        assert_eq!(buckets[3].label, "3+");
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn distribution_places_ratios_in_ranges() {
        let trades = vec![
            trade_with_rr(Some(0.5), 10.0),
            trade_with_rr(Some(1.0), 20.0),
            trade_with_rr(Some(1.9), -5.0),
            trade_with_rr(Some(2.5), 30.0),
            trade_with_rr(Some(3.0), 40.0),
            trade_with_rr(Some(7.2), -8.0),
        ];
        let buckets = compute_rr_distribution(&trades);

        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[2].count, 1);
        assert_eq!(buckets[3].count, 2);
    }

    #[test]
    fn distribution_boundaries_lower_inclusive() {
        let trades = vec![trade_with_rr(Some(2.0), 10.0)];
        let buckets = compute_rr_distribution(&trades);
        assert_eq!(buckets[1].count, 0);
        assert_eq!(buckets[2].count, 1);
    }

    #[test]
    fn distribution_excludes_null_ratio() {
        let trades = vec![trade_with_rr(None, 100.0), trade_with_rr(Some(1.5), 50.0)];
        let buckets = compute_rr_distribution(&trades);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn distribution_negative_ratio_lands_below_one() {
        let trades = vec![trade_with_rr(Some(-0.4), -15.0)];
        let buckets = compute_rr_distribution(&trades);
        assert_eq!(buckets[0].count, 1);
        assert!((buckets[0].win_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_win_rate_per_bucket() {
        let trades = vec![
            trade_with_rr(Some(1.2), 50.0),
            trade_with_rr(Some(1.8), -20.0),
            trade_with_rr(Some(1.5), 30.0),
        ];
        let buckets = compute_rr_distribution(&trades);
        assert_eq!(buckets[1].count, 3);
        assert!((buckets[1].win_rate - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_excludes_open_trades() {
        let mut open = trade_with_rr(Some(1.5), 0.0);
        open.pnl = None;
        open.status = TradeStatus::Open;
        let buckets = compute_rr_distribution(&[open]);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 0);
    }
}

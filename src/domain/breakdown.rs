//! Categorical performance breakdowns: weekday, hour, direction, and the
//! journal's free-form labels (emotion, setup, mistakes, tags).
//!
//! Single-valued dimensions count each qualifying trade in exactly one
//! bucket. Multi-valued dimensions (mistakes, tags) fan out one increment
//! per label, so their bucket counts can sum past the trade total.

use chrono::{Datelike, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;

use super::outcome::{win_rate, Outcome};
use super::trade::{Direction, Trade};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketStats {
    pub label: String,
    pub trade_count: usize,
    pub win_count: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionStats {
    pub direction: Direction,
    pub trade_count: usize,
    pub win_count: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    pub avg_rr: f64,
}

const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    count: usize,
    wins: usize,
    losses: usize,
    pnl_sum: f64,
    rr_sum: f64,
    rr_count: usize,
}

impl Accumulator {
    fn add(&mut self, pnl: f64, rr: Option<f64>) {
        self.count += 1;
        self.pnl_sum += pnl;
        match Outcome::classify(pnl) {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Breakeven => {}
        }
        if let Some(rr) = rr {
            self.rr_sum += rr;
            self.rr_count += 1;
        }
    }

    fn avg_pnl(&self) -> f64 {
        if self.count > 0 {
            self.pnl_sum / self.count as f64
        } else {
            0.0
        }
    }

    fn avg_rr(&self) -> f64 {
        if self.rr_count > 0 {
            self.rr_sum / self.rr_count as f64
        } else {
            0.0
        }
    }

    fn into_bucket(self, label: String) -> BucketStats {
        BucketStats {
            label,
            trade_count: self.count,
            win_count: self.wins,
            win_rate: win_rate(self.wins, self.losses),
            total_pnl: self.pnl_sum,
            avg_pnl: self.avg_pnl(),
        }
    }
}

/// Seven buckets, Monday first, keyed on `trade_date`. Empty weekdays are
/// kept with all-zero fields.
pub fn day_of_week_stats(trades: &[Trade]) -> Vec<BucketStats> {
    let mut accs = [Accumulator::default(); 7];

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        let idx = trade.trade_date.weekday().num_days_from_monday() as usize;
        accs[idx].add(pnl, trade.rr_ratio);
    }

    accs.into_iter()
        .zip(WEEKDAY_LABELS)
        .map(|(acc, label)| acc.into_bucket(label.to_string()))
        .collect()
}

/// Twenty-four buckets keyed on the hour of `closed_at`. Trades without a
/// close timestamp are skipped by this dimension only.
pub fn hour_of_day_stats(trades: &[Trade]) -> Vec<BucketStats> {
    let mut accs = [Accumulator::default(); 24];

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        let Some(closed_at) = trade.closed_at else {
            continue;
        };
        accs[closed_at.hour() as usize].add(pnl, trade.rr_ratio);
    }

    accs.into_iter()
        .enumerate()
        .map(|(hour, acc)| acc.into_bucket(format!("{hour:02}")))
        .collect()
}

/// Exactly two buckets, long then short, with the extra realized R:R mean.
pub fn direction_stats(trades: &[Trade]) -> Vec<DirectionStats> {
    let mut long = Accumulator::default();
    let mut short = Accumulator::default();

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        match trade.direction {
            Direction::Long => long.add(pnl, trade.rr_ratio),
            Direction::Short => short.add(pnl, trade.rr_ratio),
        }
    }

    [(Direction::Long, long), (Direction::Short, short)]
        .into_iter()
        .map(|(direction, acc)| DirectionStats {
            direction,
            trade_count: acc.count,
            win_count: acc.wins,
            win_rate: win_rate(acc.wins, acc.losses),
            total_pnl: acc.pnl_sum,
            avg_pnl: acc.avg_pnl(),
            avg_rr: acc.avg_rr(),
        })
        .collect()
}

/// Buckets by the single-valued `emotion` label; unlabeled trades are skipped.
pub fn emotion_stats(trades: &[Trade]) -> Vec<BucketStats> {
    label_stats(trades, |t| t.emotion.as_deref().into_iter().collect())
}

/// Buckets by the single-valued `setup` label; unlabeled trades are skipped.
pub fn setup_stats(trades: &[Trade]) -> Vec<BucketStats> {
    label_stats(trades, |t| t.setup.as_deref().into_iter().collect())
}

/// Fan-out over the `mistakes` labels: a trade tagged with several
/// mistakes increments every one of those buckets.
pub fn mistake_stats(trades: &[Trade]) -> Vec<BucketStats> {
    label_stats(trades, |t| t.mistakes.iter().map(String::as_str).collect())
}

/// Fan-out over the `tags` labels, same semantics as [`mistake_stats`].
pub fn tag_stats(trades: &[Trade]) -> Vec<BucketStats> {
    label_stats(trades, |t| t.tags.iter().map(String::as_str).collect())
}

fn label_stats<'a, F>(trades: &'a [Trade], labels_of: F) -> Vec<BucketStats>
where
    F: Fn(&'a Trade) -> Vec<&'a str>,
{
    let mut accs: BTreeMap<&str, Accumulator> = BTreeMap::new();

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        for label in labels_of(trade) {
            accs.entry(label).or_default().add(pnl, trade.rr_ratio);
        }
    }

    let mut buckets: Vec<BucketStats> = accs
        .into_iter()
        .map(|(label, acc)| acc.into_bucket(label.to_string()))
        .collect();

    // Highest earner first; label order settles equal P&L so the output
    // stays identical across calls.
    buckets.sort_by(|a, b| {
        b.total_pnl
            .total_cmp(&a.total_pnl)
            .then_with(|| a.label.cmp(&b.label))
    });
    buckets
}

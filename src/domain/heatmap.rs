//! Calendar heatmap input for one month of trading.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use super::trade::Trade;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeHeatmapDay {
    pub date: NaiveDate,
    pub pnl: f64,
    pub trade_count: usize,
}

/// Per-day net P&L and trade count for the given `(year, month)`,
/// ascending by date, one entry per day with at least one qualifying
/// trade. Color mapping is the renderer's job; the output here is
/// sign-correct and magnitude-linear so any mapping stays deterministic.
pub fn compute_trade_heatmap(trades: &[Trade], year: i32, month: u32) -> Vec<TradeHeatmapDay> {
    let mut days: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        if trade.trade_date.year() != year || trade.trade_date.month() != month {
            continue;
        }
        let entry = days.entry(trade.trade_date).or_insert((0.0, 0));
        entry.0 += pnl;
        entry.1 += 1;
    }

    days.into_iter()
        .map(|(date, (pnl, trade_count))| TradeHeatmapDay {
            date,
            pnl,
            trade_count,
        })
        .collect()
}

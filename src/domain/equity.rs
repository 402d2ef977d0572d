//! Equity curve and drawdown series, bucketed by trading day.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::trade::Trade;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityCurvePoint {
    pub date: NaiveDate,
    pub daily_pnl: f64,
    pub trade_count: usize,
    pub cumulative_pnl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawdownPoint {
    pub date: NaiveDate,
    /// Gap between the running equity peak and current equity; never negative.
    pub drawdown: f64,
}

/// One point per day with at least one qualifying trade, ascending by date,
/// `cumulative_pnl` including that day. Days without trades are not
/// synthesized; any date-axis interpolation is the renderer's concern.
pub fn compute_equity_curve(trades: &[Trade]) -> Vec<EquityCurvePoint> {
    let mut daily: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        let entry = daily.entry(trade.trade_date).or_insert((0.0, 0));
        entry.0 += pnl;
        entry.1 += 1;
    }

    let mut cumulative_pnl = 0.0;
    let mut curve = Vec::with_capacity(daily.len());
    for (date, (daily_pnl, trade_count)) in daily {
        cumulative_pnl += daily_pnl;
        curve.push(EquityCurvePoint {
            date,
            daily_pnl,
            trade_count,
            cumulative_pnl,
        });
    }
    curve
}

/// Drawdown per equity point: running peak (initialized to the first
/// point, never decreasing) minus current equity. Zero whenever the curve
/// makes a new high.
pub fn compute_drawdown_curve(curve: &[EquityCurvePoint]) -> Vec<DrawdownPoint> {
    let mut points = Vec::with_capacity(curve.len());
    let mut peak = match curve.first() {
        Some(p) => p.cumulative_pnl,
        None => return points,
    };

    for point in curve {
        if point.cumulative_pnl > peak {
            peak = point.cumulative_pnl;
        }
        points.push(DrawdownPoint {
            date: point.date,
            drawdown: peak - point.cumulative_pnl,
        });
    }
    points
}

/// Maximum drawdown over the whole series; 0 for an empty curve.
pub fn max_drawdown(curve: &[EquityCurvePoint]) -> f64 {
    compute_drawdown_curve(curve)
        .iter()
        .map(|p| p.drawdown)
        .fold(0.0, f64::max)
}

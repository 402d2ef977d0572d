//! Portfolio-level summary: max drawdown, best win streak, active days.

use serde::Serialize;

use super::equity::{compute_equity_curve, max_drawdown};
use super::streak::longest_win_streak;
use super::trade::Trade;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub max_drawdown: f64,
    pub longest_win_streak: usize,
    /// Distinct calendar days with at least one qualifying trade.
    pub active_days: usize,
}

impl PortfolioSummary {
    pub fn compute(trades: &[Trade]) -> Self {
        let curve = compute_equity_curve(trades);
        PortfolioSummary {
            max_drawdown: max_drawdown(&curve),
            longest_win_streak: longest_win_streak(trades),
            active_days: curve.len(),
        }
    }
}

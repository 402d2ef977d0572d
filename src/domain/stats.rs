//! Summary performance statistics over a trade list.

use serde::Serialize;

use super::outcome::{safe_divide, win_rate, Outcome};
use super::trade::Trade;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeStats {
    pub total_trades: usize,
    pub win_count: usize,
    pub loss_count: usize,
    pub breakeven_count: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    pub avg_win: f64,
    /// Mean losing P&L as a positive magnitude.
    pub avg_loss: f64,
    pub gross_profit: f64,
    pub gross_loss: f64,
    pub profit_factor: f64,
    pub avg_rr: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
}

impl TradeStats {
    /// Compute summary stats over the qualifying trades in `trades`.
    /// Open trades and trades with no recorded P&L are skipped entirely;
    /// an empty input yields all-zero stats.
    pub fn compute(trades: &[Trade]) -> Self {
        let mut total_trades = 0usize;
        let mut win_count = 0usize;
        let mut loss_count = 0usize;
        let mut breakeven_count = 0usize;
        let mut total_pnl = 0.0_f64;
        let mut gross_profit = 0.0_f64;
        let mut gross_loss = 0.0_f64;
        let mut rr_sum = 0.0_f64;
        let mut rr_count = 0usize;
        let mut best_trade: Option<f64> = None;
        let mut worst_trade: Option<f64> = None;

        for trade in trades {
            let Some(pnl) = trade.qualifying_pnl() else {
                continue;
            };

            total_trades += 1;
            total_pnl += pnl;

            match Outcome::classify(pnl) {
                Outcome::Win => {
                    win_count += 1;
                    gross_profit += pnl;
                }
                Outcome::Loss => {
                    loss_count += 1;
                    gross_loss += pnl.abs();
                }
                Outcome::Breakeven => breakeven_count += 1,
            }

            if let Some(rr) = trade.rr_ratio {
                rr_sum += rr;
                rr_count += 1;
            }

            best_trade = Some(best_trade.map_or(pnl, |b: f64| b.max(pnl)));
            worst_trade = Some(worst_trade.map_or(pnl, |w: f64| w.min(pnl)));
        }

        let avg_pnl = if total_trades > 0 {
            total_pnl / total_trades as f64
        } else {
            0.0
        };

        let avg_win = if win_count > 0 {
            gross_profit / win_count as f64
        } else {
            0.0
        };

        let avg_loss = if loss_count > 0 {
            gross_loss / loss_count as f64
        } else {
            0.0
        };

        let avg_rr = if rr_count > 0 {
            rr_sum / rr_count as f64
        } else {
            0.0
        };

        TradeStats {
            total_trades,
            win_count,
            loss_count,
            breakeven_count,
            win_rate: win_rate(win_count, loss_count),
            total_pnl,
            avg_pnl,
            avg_win,
            avg_loss,
            gross_profit,
            gross_loss,
            profit_factor: safe_divide(gross_profit, gross_loss),
            avg_rr,
            best_trade: best_trade.unwrap_or(0.0),
            worst_trade: worst_trade.unwrap_or(0.0),
        }
    }
}

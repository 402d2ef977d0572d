//! Weekly P&L buckets.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

use super::trade::Trade;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPnl {
    /// Monday of the ISO week the bucket covers.
    pub week_start: NaiveDate,
    pub pnl: f64,
}

/// Net P&L per ISO week (Monday start), ascending by week. Weeks with no
/// qualifying trades are not synthesized; consumers wanting a fixed
/// trailing window slice the tail themselves.
pub fn compute_weekly_pnl(trades: &[Trade]) -> Vec<WeeklyPnl> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for trade in trades {
        let Some(pnl) = trade.qualifying_pnl() else {
            continue;
        };
        let week_start = trade.trade_date.week(Weekday::Mon).first_day();
        *weeks.entry(week_start).or_insert(0.0) += pnl;
    }

    weeks
        .into_iter()
        .map(|(week_start, pnl)| WeeklyPnl { week_start, pnl })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::{Direction, TradeStatus};

    fn closed_on(date: NaiveDate, pnl: f64) -> Trade {
        Trade {
            id: date.to_string(),
            pair: "EURUSD".into(),
            direction: Direction::Long,
            entry_price: 1.0,
            exit_price: None,
            lot_size: 1.0,
            stop_loss: None,
            take_profit: None,
            pnl: Some(pnl),
            pnl_pips: None,
            rr_ratio: None,
            commission: 0.0,
            swap: 0.0,
            status: TradeStatus::Closed,
            trade_date: date,
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

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_empty_input() {
        assert!(compute_weekly_pnl(&[]).is_empty());
    }

    #[test]
    fn weekly_buckets_by_monday_start() {
        // 2024-06-05 is a Wednesday; its week starts Monday 2024-06-03.
        let trades = vec![
            closed_on(date(2024, 6, 5), 100.0),
            closed_on(date(2024, 6, 7), -30.0),
        ];
        let weekly = compute_weekly_pnl(&trades);

        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].week_start, date(2024, 6, 3));
        assert!((weekly[0].pnl - 70.0).abs() < 1e-9);
    }

    #[test]
    fn weekly_sunday_belongs_to_preceding_monday() {
        // 2024-06-09 is a Sunday; ISO week starts Monday 2024-06-03.
        let trades = vec![closed_on(date(2024, 6, 9), 25.0)];
        let weekly = compute_weekly_pnl(&trades);
        assert_eq!(weekly[0].week_start, date(2024, 6, 3));
    }

    #[test]
    fn weekly_gaps_not_synthesized() {
        let trades = vec![
            closed_on(date(2024, 6, 4), 10.0),
            closed_on(date(2024, 6, 25), 20.0),
        ];
        let weekly = compute_weekly_pnl(&trades);

        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].week_start, date(2024, 6, 3));
        assert_eq!(weekly[1].week_start, date(2024, 6, 24));
    }

    #[test]
    fn weekly_sorted_ascending() {
        let trades = vec![
            closed_on(date(2024, 7, 2), 5.0),
            closed_on(date(2024, 6, 4), 10.0),
            closed_on(date(2024, 6, 18), -3.0),
        ];
        let weekly = compute_weekly_pnl(&trades);
        assert!(weekly.windows(2).all(|w| w[0].week_start < w[1].week_start));
    }

    #[test]
    fn weekly_skips_open_trades() {
        let mut open = closed_on(date(2024, 6, 5), 0.0);
        open.pnl = None;
        open.status = TradeStatus::Open;
        let trades = vec![open, closed_on(date(2024, 6, 6), 40.0)];
        let weekly = compute_weekly_pnl(&trades);

        assert_eq!(weekly.len(), 1);
        assert!((weekly[0].pnl - 40.0).abs() < 1e-9);
    }
}

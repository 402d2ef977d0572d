#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use tradelens::domain::error::TradelensError;
pub use tradelens::domain::trade::{Direction, Trade, TradeFilter, TradeStatus};
use tradelens::ports::trade_port::TradePort;

pub struct MockTradePort {
    pub trades: Vec<Trade>,
    pub error: Option<String>,
}

impl MockTradePort {
    pub fn new() -> Self {
        Self {
            trades: Vec::new(),
            error: None,
        }
    }

    pub fn with_trades(mut self, trades: Vec<Trade>) -> Self {
        self.trades = trades;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl TradePort for MockTradePort {
    fn fetch_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, TradelensError> {
        if let Some(reason) = &self.error {
            return Err(TradelensError::TradeSource {
                reason: reason.clone(),
            });
        }
        Ok(self
            .trades
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    fn list_pairs(&self) -> Result<Vec<String>, TradelensError> {
        if let Some(reason) = &self.error {
            return Err(TradelensError::TradeSource {
                reason: reason.clone(),
            });
        }
        let mut pairs: Vec<String> = self.trades.iter().map(|t| t.pair.clone()).collect();
        pairs.sort();
        pairs.dedup();
        Ok(pairs)
    }

    fn journal_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TradelensError> {
        if let Some(reason) = &self.error {
            return Err(TradelensError::TradeSource {
                reason: reason.clone(),
            });
        }
        if self.trades.is_empty() {
            return Ok(None);
        }
        let min = self.trades.iter().map(|t| t.trade_date).min().unwrap();
        let max = self.trades.iter().map(|t| t.trade_date).max().unwrap();
        Ok(Some((min, max, self.trades.len())))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

/// A closed trade with the given P&L; every optional journal field empty.
pub fn make_closed(id: &str, trade_date: NaiveDate, pnl: f64) -> Trade {
    Trade {
        id: id.to_string(),
        pair: "EURUSD".to_string(),
        direction: Direction::Long,
        entry_price: 1.0850,
        exit_price: Some(1.0900),
        lot_size: 1.0,
        stop_loss: None,
        take_profit: None,
        pnl: Some(pnl),
        pnl_pips: None,
        rr_ratio: None,
        commission: 0.0,
        swap: 0.0,
        status: TradeStatus::Closed,
        trade_date,
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

/// An open trade with no realized P&L.
pub fn make_open(id: &str, trade_date: NaiveDate) -> Trade {
    let mut trade = make_closed(id, trade_date, 0.0);
    trade.status = TradeStatus::Open;
    trade.pnl = None;
    trade.exit_price = None;
    trade
}

pub const JOURNAL_HEADER: &str = "id,pair,direction,entry_price,exit_price,lot_size,stop_loss,take_profit,pnl,pnl_pips,rr_ratio,commission,swap,status,trade_date,closed_at,emotion,confidence,setup,mistakes,tags,notes,screenshot_url";

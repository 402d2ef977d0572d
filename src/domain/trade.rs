//! Trade record types as supplied by the journal store.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Direction> {
        match s.to_lowercase().as_str() {
            "long" | "buy" => Some(Direction::Long),
            "short" | "sell" => Some(Direction::Short),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
    Breakeven,
}

impl TradeStatus {
    pub fn parse(s: &str) -> Option<TradeStatus> {
        match s.to_lowercase().as_str() {
            "open" => Some(TradeStatus::Open),
            "closed" => Some(TradeStatus::Closed),
            "breakeven" | "be" => Some(TradeStatus::Breakeven),
            _ => None,
        }
    }
}

/// One logged trade. The engine treats records as read-only input;
/// optional fields stay `None` while a trade is open or was never filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub pair: String,
    pub direction: Direction,
    pub entry_price: f64,
    pub exit_price: Option<f64>,
    pub lot_size: f64,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub pnl: Option<f64>,
    pub pnl_pips: Option<f64>,
    pub rr_ratio: Option<f64>,
    pub commission: f64,
    pub swap: f64,
    pub status: TradeStatus,
    pub trade_date: NaiveDate,
    pub closed_at: Option<NaiveDateTime>,
    pub emotion: Option<String>,
    pub confidence: Option<u8>,
    pub setup: Option<String>,
    pub mistakes: Vec<String>,
    pub tags: Vec<String>,
    pub notes: String,
    pub screenshot_url: Option<String>,
}

impl Trade {
    /// Realized P&L for aggregation purposes. `None` excludes the trade
    /// from every P&L-based aggregate: open trades and trades with no
    /// recorded `pnl` never participate.
    pub fn qualifying_pnl(&self) -> Option<f64> {
        if self.status == TradeStatus::Open {
            return None;
        }
        self.pnl
    }

    /// Win/loss/breakeven classification; `None` for non-qualifying trades.
    pub fn outcome(&self) -> Option<Outcome> {
        self.qualifying_pnl().map(Outcome::classify)
    }

    /// Chronological sort key: close timestamp, falling back to the trade
    /// date at midnight when the trade has no recorded close.
    pub fn sort_key(&self) -> NaiveDateTime {
        self.closed_at
            .unwrap_or_else(|| self.trade_date.and_time(NaiveTime::MIN))
    }
}

/// Filter applied by the trade store before the engine sees the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<TradeStatus>,
    pub pair: Option<String>,
}

impl TradeFilter {
    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(start) = self.start_date {
            if trade.trade_date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if trade.trade_date > end {
                return false;
            }
        }
        if let Some(status) = self.status {
            if trade.status != status {
                return false;
            }
        }
        if let Some(ref pair) = self.pair {
            if &trade.pair != pair {
                return false;
            }
        }
        true
    }
}

//! Trade record source port trait.
//!
//! Persistence, pagination, and filtering belong to the store behind this
//! trait; the engine only ever consumes the materialized list.

use crate::domain::error::TradelensError;
use crate::domain::trade::{Trade, TradeFilter};
use chrono::NaiveDate;

pub trait TradePort {
    /// Fetch the trades matching `filter`, already materialized.
    fn fetch_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, TradelensError>;

    /// Distinct instrument symbols present in the journal, sorted.
    fn list_pairs(&self) -> Result<Vec<String>, TradelensError>;

    /// First trade date, last trade date, and total record count;
    /// `None` for an empty journal.
    fn journal_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TradelensError>;
}

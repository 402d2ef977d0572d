//! CSV journal file adapter: a [`TradePort`] over an exported trade log.

use crate::domain::error::TradelensError;
use crate::domain::trade::{Direction, Trade, TradeFilter, TradeStatus};
use crate::ports::trade_port::TradePort;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub struct CsvJournalAdapter {
    path: PathBuf,
}

impl CsvJournalAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_all(&self) -> Result<Vec<Trade>, TradelensError> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| TradelensError::TradeSource {
                reason: format!("failed to read {}: {}", self.path.display(), e),
            })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let headers = rdr
            .headers()
            .map_err(|e| TradelensError::TradeSource {
                reason: format!("CSV header error: {}", e),
            })?
            .clone();

        let columns: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();

        let mut trades = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            // Header occupies line 1.
            let line = idx + 2;
            let record = result.map_err(|e| TradelensError::TradeSource {
                reason: format!("CSV parse error: {}", e),
            })?;
            trades.push(parse_trade(&record, &columns, line)?);
        }
        Ok(trades)
    }
}

impl TradePort for CsvJournalAdapter {
    fn fetch_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, TradelensError> {
        let mut trades = self.load_all()?;
        trades.retain(|t| filter.matches(t));
        Ok(trades)
    }

    fn list_pairs(&self) -> Result<Vec<String>, TradelensError> {
        let trades = self.load_all()?;
        let mut pairs: Vec<String> = trades.into_iter().map(|t| t.pair).collect();
        pairs.sort();
        pairs.dedup();
        Ok(pairs)
    }

    fn journal_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, TradelensError> {
        let trades = self.load_all()?;
        let mut dates = trades.iter().map(|t| t.trade_date);
        let first = match dates.next() {
            Some(d) => d,
            None => return Ok(None),
        };
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Ok(Some((min, max, trades.len())))
    }
}

struct Row<'r> {
    record: &'r csv::StringRecord,
    columns: &'r HashMap<String, usize>,
    line: usize,
}

impl<'r> Row<'r> {
    fn cell(&self, name: &str) -> Option<&'r str> {
        self.columns
            .get(name)
            .and_then(|&i| self.record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn required(&self, name: &str) -> Result<&'r str, TradelensError> {
        self.cell(name).ok_or_else(|| TradelensError::InvalidRecord {
            line: self.line,
            reason: format!("missing {} value", name),
        })
    }

    fn invalid(&self, name: &str, reason: String) -> TradelensError {
        TradelensError::InvalidRecord {
            line: self.line,
            reason: format!("invalid {} value: {}", name, reason),
        }
    }

    fn parse_f64(&self, name: &str) -> Result<f64, TradelensError> {
        self.required(name)?
            .parse()
            .map_err(|e: std::num::ParseFloatError| self.invalid(name, e.to_string()))
    }

    fn parse_opt_f64(&self, name: &str) -> Result<Option<f64>, TradelensError> {
        self.cell(name)
            .map(|s| {
                s.parse()
                    .map_err(|e: std::num::ParseFloatError| self.invalid(name, e.to_string()))
            })
            .transpose()
    }

    fn parse_labels(&self, name: &str) -> Vec<String> {
        self.cell(name)
            .map(|s| {
                s.split(';')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn parse_trade(
    record: &csv::StringRecord,
    columns: &HashMap<String, usize>,
    line: usize,
) -> Result<Trade, TradelensError> {
    let row = Row {
        record,
        columns,
        line,
    };

    let direction_str = row.required("direction")?;
    let direction = Direction::parse(direction_str).ok_or_else(|| {
        row.invalid("direction", format!("unknown direction '{direction_str}'"))
    })?;

    let status_str = row.required("status")?;
    let status = TradeStatus::parse(status_str)
        .ok_or_else(|| row.invalid("status", format!("unknown status '{status_str}'")))?;

    let trade_date = NaiveDate::parse_from_str(row.required("trade_date")?, "%Y-%m-%d")
        .map_err(|e| row.invalid("trade_date", e.to_string()))?;

    let closed_at = row
        .cell("closed_at")
        .map(|s| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map_err(|e| row.invalid("closed_at", e.to_string()))
        })
        .transpose()?;

    let confidence = row
        .cell("confidence")
        .map(|s| {
            s.parse::<u8>()
                .map_err(|e| row.invalid("confidence", e.to_string()))
        })
        .transpose()?;

    Ok(Trade {
        id: row.required("id")?.to_string(),
        pair: row.required("pair")?.to_string(),
        direction,
        entry_price: row.parse_f64("entry_price")?,
        exit_price: row.parse_opt_f64("exit_price")?,
        lot_size: row.parse_f64("lot_size")?,
        stop_loss: row.parse_opt_f64("stop_loss")?,
        take_profit: row.parse_opt_f64("take_profit")?,
        pnl: row.parse_opt_f64("pnl")?,
        pnl_pips: row.parse_opt_f64("pnl_pips")?,
        rr_ratio: row.parse_opt_f64("rr_ratio")?,
        commission: row.parse_opt_f64("commission")?.unwrap_or(0.0),
        swap: row.parse_opt_f64("swap")?.unwrap_or(0.0),
        status,
        trade_date,
        closed_at,
        emotion: row.cell("emotion").map(str::to_string),
        confidence,
        setup: row.cell("setup").map(str::to_string),
        mistakes: row.parse_labels("mistakes"),
        tags: row.parse_labels("tags"),
        notes: row.cell("notes").unwrap_or_default().to_string(),
        screenshot_url: row.cell("screenshot_url").map(str::to_string),
    })
}

//! JSON report adapter: serializes the analytics bundle for chart and
//! table renderers.
//!
//! Dates come out as `YYYY-MM-DD` strings. JSON has no infinity literal,
//! so the profit-factor sentinel serializes as `null`; renderers treat a
//! null profit factor as "∞".

use crate::domain::error::TradelensError;
use crate::domain::report::AnalyticsReport;
use crate::ports::report_port::ReportPort;
use std::fs;

pub struct JsonReportAdapter;

impl JsonReportAdapter {
    pub fn render(report: &AnalyticsReport) -> Result<String, TradelensError> {
        serde_json::to_string_pretty(report).map_err(|e| TradelensError::Report {
            reason: format!("failed to serialize report: {}", e),
        })
    }
}

impl ReportPort for JsonReportAdapter {
    fn write(&self, report: &AnalyticsReport, output_path: &str) -> Result<(), TradelensError> {
        let json = Self::render(report)?;
        fs::write(output_path, json).map_err(|e| TradelensError::Report {
            reason: format!("failed to write {}: {}", output_path, e),
        })
    }
}

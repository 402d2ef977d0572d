//! Report output port trait.

use crate::domain::error::TradelensError;
use crate::domain::report::AnalyticsReport;

/// Port for writing a computed analytics report to a destination the
/// presentation layer can consume.
pub trait ReportPort {
    fn write(&self, report: &AnalyticsReport, output_path: &str) -> Result<(), TradelensError>;
}

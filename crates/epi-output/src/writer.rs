//! The `ReportWriter` trait implemented by all backend writers.

use crate::{AgentReportRow, OutputResult};

/// Trait implemented by the text and CSV report writers.
pub trait ReportWriter {
    /// Write a batch of agent rows.
    fn write_rows(&mut self, rows: &[AgentReportRow]) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

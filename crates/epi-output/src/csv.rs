//! CSV report backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{AgentReportRow, OutputResult};

/// Writes agent rows to a CSV file with a header row.
pub struct CsvReportWriter {
    out:      Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Create (or truncate) the CSV file at `path` and write the header.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut out = Writer::from_path(path)?;
        out.write_record(["id", "x", "y", "status", "times_infected"])?;
        Ok(Self { out, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_rows(&mut self, rows: &[AgentReportRow]) -> OutputResult<()> {
        for row in rows {
            self.out.write_record(&[
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.status.name().to_string(),
                row.infections.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

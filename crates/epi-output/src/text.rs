//! Text report backend — one line per agent in the legacy format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::writer::ReportWriter;
use crate::{AgentReportRow, OutputResult};

/// Render one row in the legacy report format.
///
/// The wording, spacing, and `time(s)` pluralization are part of the format
/// contract — result files are diffed against historical output.
pub fn format_row(row: &AgentReportRow) -> String {
    format!(
        "Person {}: ({}, {}), status: {}, was infected {} time(s).",
        row.id, row.x, row.y, row.status, row.infections
    )
}

/// Writes agent rows as plain text lines.
pub struct TextReportWriter {
    out:      BufWriter<File>,
    finished: bool,
}

impl TextReportWriter {
    /// Create (or truncate) the report file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self { out: BufWriter::new(file), finished: false })
    }
}

impl ReportWriter for TextReportWriter {
    fn write_rows(&mut self, rows: &[AgentReportRow]) -> OutputResult<()> {
        for row in rows {
            writeln!(self.out, "{}", format_row(row))?;
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

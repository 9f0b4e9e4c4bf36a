//! Scenario loader.
//!
//! # File format
//!
//! Two header lines (grid bounds, agent count) followed by one
//! space-delimited record per agent:
//!
//! ```text
//! 10 10
//! 2
//! 1 5 5 0 1 1
//! 2 5 5 1 0 1
//! ```
//!
//! Record columns: `id x y status heading amplitude`, with
//! `status ∈ {0 = infected, 1 = susceptible, 2 = immune}` and
//! `heading ∈ {0 = N, 1 = S, 2 = E, 3 = W}`.
//!
//! Exactly `agent_count` records are consumed; anything after them is
//! ignored.  Fewer records than declared is an error.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use epi_agent::{AgentRecord, Population};
use epi_core::{EpiResult, GridBounds};

use crate::{InputError, InputResult};

// ── Raw record ────────────────────────────────────────────────────────────────

/// One record line as deserialized, before range validation.  Fields are
/// `i64` so that out-of-range values produce a line-numbered validation
/// error instead of a bare deserialization failure.
#[derive(Deserialize)]
struct RawRecord {
    id:        i64,
    x:         i64,
    y:         i64,
    status:    i64,
    heading:   i64,
    amplitude: i64,
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A fully validated scenario: the grid plus the agent records in file order.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub bounds:  GridBounds,
    pub records: Vec<AgentRecord>,
}

impl Scenario {
    /// Construct a fresh population from this scenario.
    ///
    /// Called once per executor so the two runs start from element-wise
    /// identical, independently owned state.
    pub fn build_population(&self) -> EpiResult<Population> {
        Population::from_records(self.bounds, &self.records)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a file on disk.
pub fn load_scenario(path: &Path) -> InputResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// scenarios.
pub fn load_scenario_reader<R: Read>(reader: R) -> InputResult<Scenario> {
    let mut reader = BufReader::new(reader);

    // ── Header line 1: grid bounds ────────────────────────────────────────
    let line = read_header_line(&mut reader, "grid bounds")?;
    let mut fields = line.split_whitespace();
    let max_x = parse_header_field(fields.next(), "max_x")?;
    let max_y = parse_header_field(fields.next(), "max_y")?;
    let bounds = GridBounds::new(max_x, max_y).map_err(|e| InputError::Header(e.to_string()))?;

    // ── Header line 2: agent count ────────────────────────────────────────
    let line = read_header_line(&mut reader, "agent count")?;
    let count: usize = line
        .trim()
        .parse()
        .map_err(|_| InputError::Header(format!("agent count is not a number: {:?}", line.trim())))?;
    if count == 0 {
        return Err(InputError::Header("agent count must be positive".to_string()));
    }

    // ── Record lines ──────────────────────────────────────────────────────
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::with_capacity(count);
    for (index, row) in csv_reader.deserialize::<RawRecord>().take(count).enumerate() {
        // Records start on line 3, after the two header lines.
        let line = index + 3;
        let raw = row.map_err(|e| InputError::Parse { line, message: e.to_string() })?;
        records.push(validate_record(&raw, line)?);
    }

    if records.len() < count {
        return Err(InputError::Count { expected: count, got: records.len() });
    }

    Ok(Scenario { bounds, records })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_header_line<R: BufRead>(reader: &mut R, what: &str) -> InputResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Header(format!("missing {what} line")));
    }
    Ok(line)
}

fn parse_header_field(field: Option<&str>, name: &str) -> InputResult<i32> {
    field
        .ok_or_else(|| InputError::Header(format!("missing {name}")))?
        .parse()
        .map_err(|_| InputError::Header(format!("{name} is not a number")))
}

fn validate_record(raw: &RawRecord, line: usize) -> InputResult<AgentRecord> {
    let fail = |message: String| InputError::Parse { line, message };

    if raw.id <= 0 || raw.id > u32::MAX as i64 {
        return Err(fail(format!("id must be a positive 32-bit integer, got {}", raw.id)));
    }
    if raw.amplitude <= 0 {
        return Err(fail(format!("amplitude must be positive, got {}", raw.amplitude)));
    }
    if !(0..=2).contains(&raw.status) {
        return Err(fail(format!("status code must be 0, 1, or 2, got {}", raw.status)));
    }
    if !(0..=3).contains(&raw.heading) {
        return Err(fail(format!("heading code must be 0-3, got {}", raw.heading)));
    }
    let x = i32::try_from(raw.x).map_err(|_| fail(format!("x does not fit in 32 bits: {}", raw.x)))?;
    let y = i32::try_from(raw.y).map_err(|_| fail(format!("y does not fit in 32 bits: {}", raw.y)))?;
    let amplitude = i32::try_from(raw.amplitude)
        .map_err(|_| fail(format!("amplitude does not fit in 32 bits: {}", raw.amplitude)))?;

    Ok(AgentRecord {
        id: raw.id as u32,
        x,
        y,
        status: raw.status as u8,
        heading: raw.heading as u8,
        amplitude,
    })
}

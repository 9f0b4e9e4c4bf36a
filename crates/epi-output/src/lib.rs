//! `epi-output` — result reporting for `rust_epi`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`row`]      | `AgentReportRow` — one agent's reportable final state |
//! | [`writer`]   | The `ReportWriter` trait                              |
//! | [`text`]     | Line-per-agent text backend (legacy report format)    |
//! | [`csv`]      | CSV backend                                           |
//! | [`error`]    | `OutputError`, `OutputResult`                         |
//!
//! Each executor's final population becomes one report file; the text format
//! is byte-compatible with the historical output so existing result files
//! diff cleanly.

pub mod csv;
pub mod error;
pub mod row;
pub mod text;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use row::AgentReportRow;
pub use text::{format_row, TextReportWriter};
pub use writer::ReportWriter;

pub use crate::csv::CsvReportWriter;

//! Simulation error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `EpiError` via `From` impls, or keep them separate and wrap `EpiError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::{GridBounds, Position};

/// The top-level error type for `epi-core` and a common base for sub-crates.
///
/// Every variant is a pre-simulation validation failure: once a population is
/// built, no operation inside the tick loop can fail.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("unknown heading code {0} (expected 0=N, 1=S, 2=E, 3=W)")]
    InvalidDirection(i64),

    #[error("amplitude must be positive, got {0}")]
    InvalidAmplitude(i64),

    #[error("position {position} lies outside the grid {bounds}")]
    OutOfBounds {
        position: Position,
        bounds:   GridBounds,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;

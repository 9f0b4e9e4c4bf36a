//! Simulation time and run configuration.
//!
//! Time is a bare monotonically increasing `Tick` counter.  There is no
//! wall-clock mapping: a tick is the atomic unit of the simulation (one
//! move/infect/transition cycle) and nothing in the model cares how long it
//! "really" is.

use std::fmt;

use crate::{EpiError, EpiResult};

// ── Tick ──────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration, fixed for the lifetime of a run.
///
/// Both executors consume the same config so their results are comparable:
/// the sequential executor reads only `total_ticks`, the parallel executor
/// reads both fields.
#[derive(Copy, Clone, Debug)]
pub struct RunConfig {
    /// Total ticks to simulate.  Zero is legal and leaves populations
    /// untouched.
    pub total_ticks: u64,

    /// Worker thread count for the parallel executor.  Fixed, never
    /// auto-detected: reproducing a run means reproducing its partition
    /// layout.
    pub workers: usize,
}

impl RunConfig {
    /// Validate and construct.  `workers` must be at least 1.
    pub fn new(total_ticks: u64, workers: usize) -> EpiResult<Self> {
        if workers == 0 {
            return Err(EpiError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(Self { total_ticks, workers })
    }
}

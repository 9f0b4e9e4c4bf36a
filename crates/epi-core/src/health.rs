//! Health states and the fixed status durations.

use std::fmt;

use crate::{EpiError, EpiResult};

/// Ticks an agent remains Infected before turning Immune.
pub const INFECTED_TICKS: u8 = 3;

/// Ticks an agent remains Immune before turning Susceptible again.
pub const IMMUNE_TICKS: u8 = 3;

/// An agent's epidemiological state.
///
/// The wire codes (scenario file column 4 and the `code` method) are
/// 0 = Infected, 1 = Susceptible, 2 = Immune.  Note that 0 is *Infected*,
/// not Susceptible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum HealthStatus {
    Infected,
    Susceptible,
    Immune,
}

impl HealthStatus {
    /// Decode a scenario-file status code.
    pub fn from_code(code: i64) -> EpiResult<Self> {
        match code {
            0 => Ok(HealthStatus::Infected),
            1 => Ok(HealthStatus::Susceptible),
            2 => Ok(HealthStatus::Immune),
            other => Err(EpiError::Parse(format!(
                "unknown status code {other} (expected 0=infected, 1=susceptible, 2=immune)"
            ))),
        }
    }

    /// The wire code for this status.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            HealthStatus::Infected => 0,
            HealthStatus::Susceptible => 1,
            HealthStatus::Immune => 2,
        }
    }

    /// Uppercase display name, matching the report-file vocabulary.
    pub fn name(self) -> &'static str {
        match self {
            HealthStatus::Infected => "INFECTED",
            HealthStatus::Susceptible => "SUSCEPTIBLE",
            HealthStatus::Immune => "IMMUNE",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

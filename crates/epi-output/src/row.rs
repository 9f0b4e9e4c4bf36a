//! Plain data rows written by report backends.

use epi_agent::Population;
use epi_core::HealthStatus;

/// One agent's externally observable final state.
///
/// Exactly the fields the equivalence checker compares — what a report file
/// shows is what the two executors are required to agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentReportRow {
    pub id:         u32,
    pub x:          i32,
    pub y:          i32,
    pub status:     HealthStatus,
    pub infections: u32,
}

impl AgentReportRow {
    /// Snapshot every agent of `population`, in index order.
    pub fn collect(population: &Population) -> Vec<AgentReportRow> {
        population
            .agents()
            .iter()
            .map(|agent| AgentReportRow {
                id:         agent.id.0,
                x:          agent.position.x,
                y:          agent.position.y,
                status:     agent.status,
                infections: agent.infections,
            })
            .collect()
    }
}

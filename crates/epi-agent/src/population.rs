//! The population store: every agent of one simulation run.

use epi_core::{EpiResult, GridBounds};

use crate::{Agent, AgentRecord};

/// An ordered, fixed-size collection of agents plus the grid they move on.
///
/// Index order is the scenario-file order; it is stable for the run and
/// carries no meaning beyond partition assignment.  The population is mutated
/// in place tick by tick by exactly one executor and never resized.
#[derive(Clone, Debug)]
pub struct Population {
    bounds: GridBounds,
    agents: Vec<Agent>,
}

impl Population {
    /// Build a population from parsed records.  A single invalid record
    /// aborts construction — there is no partial-population recovery.
    pub fn from_records(bounds: GridBounds, records: &[AgentRecord]) -> EpiResult<Self> {
        let agents = records
            .iter()
            .map(|record| Agent::from_record(record, bounds))
            .collect::<EpiResult<Vec<_>>>()?;
        Ok(Self { bounds, agents })
    }

    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Read-only view of all agents in index order.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable view of all agents, for the executor that owns this copy.
    #[inline]
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }
}

//! Agent identity.

use std::fmt;

/// The identity an agent carries through its lifetime, taken verbatim from
/// the scenario file (always positive).
///
/// Distinct from the agent's *index* in the population: the index is a plain
/// `usize` with no meaning beyond partition assignment, while the `AgentId`
/// is what the infection scan compares to exclude an agent from infecting
/// itself.  Two agents standing on the same cell are "neighbors" only if
/// their ids differ.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

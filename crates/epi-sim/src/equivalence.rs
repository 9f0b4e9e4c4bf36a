//! The serial-vs-parallel correctness oracle.

use epi_agent::{Agent, Population};

/// Compare two populations pairwise by index and return the index of the
/// first disagreeing pair, or `None` if they agree everywhere.
///
/// Agents are compared on `{id, position, status, infections}` — the
/// externally observable state.  Timers and the exposure flag are internal
/// phase machinery and excluded.
///
/// Both populations must come from the same input and be the same length
/// (debug-asserted); a mismatch indicates a synchronization bug in the
/// parallel executor and is a diagnostic, not an error.
pub fn first_mismatch(a: &Population, b: &Population) -> Option<usize> {
    debug_assert_eq!(a.len(), b.len(), "populations built from the same input");
    a.agents()
        .iter()
        .zip(b.agents())
        .position(|(x, y)| !observably_equal(x, y))
}

fn observably_equal(a: &Agent, b: &Agent) -> bool {
    a.id == b.id
        && a.position == b.position
        && a.status == b.status
        && a.infections == b.infections
}

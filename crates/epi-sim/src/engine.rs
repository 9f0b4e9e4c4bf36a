//! The step engine: one tick's three phases as free functions over slices.
//!
//! Each function takes a *span* — the caller's scope of the population.  The
//! sequential executor passes the whole population as one span; the parallel
//! executor passes each worker's partition.  [`infect_span`] is the only
//! phase that looks beyond its span: infection needs the fully-moved
//! positions of *all* agents, which is exactly why the parallel executor
//! barriers between phases.

use std::ops::Range;

use epi_agent::{Agent, Population};
use epi_core::{GridBounds, HealthStatus};

/// Move phase: advance every agent in the span.
pub fn move_span(agents: &mut [Agent], bounds: GridBounds) {
    for agent in agents {
        agent.advance(bounds);
    }
}

/// Infect phase: for each Infected agent whose index lies in `span`, scan
/// the entire population and flag every Susceptible agent standing on the
/// same cell (excluding the carrier itself, by id).
///
/// The scan is deliberately O(population) per carrier — no spatial index.
/// Flags are set through a shared reference (`Agent::mark_exposed` is an
/// atomic store), so the span's carriers may flag agents outside the span.
pub fn infect_span(all: &[Agent], span: Range<usize>) {
    for carrier in &all[span] {
        if carrier.status != HealthStatus::Infected {
            continue;
        }
        for other in all {
            if other.position == carrier.position
                && other.id != carrier.id
                && other.status == HealthStatus::Susceptible
            {
                other.mark_exposed();
            }
        }
    }
}

/// Transition phase: advance every agent's status machine, consuming the
/// infect phase's flags.
pub fn transition_span(agents: &mut [Agent]) {
    for agent in agents {
        agent.step_status();
    }
}

/// One full tick over a whole population: the three phases, each as a
/// complete pass.  This is the sequential executor's inner loop and the
/// single-span reference the parallel protocol must reproduce.
pub fn run_tick(population: &mut Population) {
    let bounds = population.bounds();
    move_span(population.agents_mut(), bounds);
    infect_span(population.agents(), 0..population.len());
    transition_span(population.agents_mut());
}

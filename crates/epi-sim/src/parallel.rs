//! The barrier-synchronized parallel executor.
//!
//! A fixed pool of `config.workers` persistent threads shares one
//! population.  Each worker owns a contiguous index range and, per tick,
//! walks the three phases with a full-pool rendezvous after each:
//!
//! ```text
//! move own range      ── barrier ──
//! infect own range,
//!   scanning ALL      ── barrier ──
//! transition own range ── barrier ──  (next tick)
//! ```
//!
//! Barrier 1 makes every move write visible before any infect read; barrier
//! 2 makes every exposure flag visible before any transition consumes it;
//! barrier 3 fences the tick off from the next move phase.  Three waits per
//! tick is the minimum: dropping any one admits a stale-position read or a
//! half-applied flag.  Workers suspend only at the barriers and never block
//! elsewhere; there is no cancellation — a run is always exactly
//! `total_ticks` ticks.

use std::ops::Range;
use std::sync::Barrier;
use std::thread;

use epi_agent::Population;
use epi_core::{GridBounds, RunConfig};

use crate::engine;
use crate::error::{SimError, SimResult};
use crate::partition;
use crate::shared::SharedAgents;

/// Run `config.total_ticks` ticks over `population` on `config.workers`
/// persistent worker threads.
///
/// Produces a population bit-identical (in the fields the equivalence
/// checker compares, and in fact in all of them) to
/// [`sequential::run`][crate::sequential::run] from the same initial state.
pub fn run(population: &mut Population, config: &RunConfig) -> SimResult<()> {
    if config.workers == 0 {
        return Err(SimError::Config(
            "worker count must be at least 1".to_string(),
        ));
    }

    let ticks = config.total_ticks;
    let bounds = population.bounds();
    let ranges = partition::split(population.len(), config.workers);
    let barrier = Barrier::new(config.workers);
    let shared = SharedAgents::new(population.agents_mut());

    thread::scope(|scope| {
        for span in ranges {
            let shared = &shared;
            let barrier = &barrier;
            scope.spawn(move || worker_loop(shared, barrier, span, bounds, ticks));
        }
    });

    Ok(())
}

/// One worker's whole run: `ticks` iterations of the three-phase protocol
/// over its own `span`.
fn worker_loop(
    shared:  &SharedAgents<'_>,
    barrier: &Barrier,
    span:    Range<usize>,
    bounds:  GridBounds,
    ticks:   u64,
) {
    debug_assert!(span.end <= shared.len());

    for _ in 0..ticks {
        // ── Move ──────────────────────────────────────────────────────────
        {
            // SAFETY: `span` is this worker's partition; partitions are
            // disjoint (partition::split) and every worker is between the
            // same pair of barriers, so no `all` borrow is live.  The borrow
            // ends at the block's close, before the wait.
            let own = unsafe { shared.span_mut(span.clone()) };
            engine::move_span(own, bounds);
        }
        barrier.wait();

        // ── Infect ────────────────────────────────────────────────────────
        {
            // SAFETY: every worker has passed the move barrier and none has
            // reached the infect barrier, so no `span_mut` borrow is live
            // anywhere.  Writes in this phase go only through the atomic
            // exposure flag.
            let all = unsafe { shared.all() };
            engine::infect_span(all, span.clone());
        }
        barrier.wait();

        // ── Transition ────────────────────────────────────────────────────
        {
            // SAFETY: as for the move phase — disjoint spans, all `all`
            // borrows retired at the infect barrier.
            let own = unsafe { shared.span_mut(span.clone()) };
            engine::transition_span(own);
        }
        barrier.wait();
    }
}

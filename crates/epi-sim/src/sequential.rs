//! The single-threaded reference executor.

use epi_agent::Population;
use epi_core::{RunConfig, Tick};

use crate::engine;
use crate::observer::TickObserver;

/// Run `config.total_ticks` ticks over `population` on the calling thread,
/// each tick as three full passes in phase order.
///
/// This is the reference result the parallel executor is checked against.
/// The observer sees the population after each tick's transition phase; use
/// [`NoopObserver`][crate::NoopObserver] when no callbacks are needed.
pub fn run<O: TickObserver>(population: &mut Population, config: &RunConfig, observer: &mut O) {
    for tick in 0..config.total_ticks {
        engine::run_tick(population);
        observer.on_tick_end(Tick(tick), population);
    }
}

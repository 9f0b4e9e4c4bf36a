//! Tick observer trait for progress reporting and per-tick inspection.

use epi_agent::Population;
use epi_core::Tick;

/// Callback invoked by [`sequential::run`][crate::sequential::run] after each
/// tick's transition phase completes.
///
/// The method has a default no-op implementation so implementors only need to
/// override what they care about.  The parallel executor takes no observer:
/// its workers run every tick inside the barrier protocol without returning
/// to a coordinating thread, so there is no point at which a callback could
/// see a consistent population mid-run.
///
/// # Example — per-tick head count
///
/// ```rust,ignore
/// struct InfectedCount;
///
/// impl TickObserver for InfectedCount {
///     fn on_tick_end(&mut self, tick: Tick, population: &Population) {
///         let n = population.agents().iter()
///             .filter(|a| a.status == HealthStatus::Infected)
///             .count();
///         println!("{tick}: {n} infected");
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called once per tick with the post-transition population.
    fn on_tick_end(&mut self, _tick: Tick, _population: &Population) {}
}

/// A [`TickObserver`] that does nothing.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}

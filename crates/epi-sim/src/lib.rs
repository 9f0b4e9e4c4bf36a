//! `epi-sim` — tick loop executors for the rust_epi simulation.
//!
//! # Three-phase tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Move        — every agent steps along its axis, reflecting at edges.
//!   ② Infect      — every Infected agent scans the WHOLE population for
//!                   Susceptible agents on its cell and flags them.
//!   ③ Transition  — every agent advances its status machine, consuming
//!                   the flags set in ②.
//! ```
//!
//! The phase bodies live in [`engine`] and are shared verbatim by both
//! executors; phase ordering is the correctness invariant.  ② must observe
//! the positions produced by ① for *all* agents of the same tick, and ③ must
//! observe ②'s flags of the same tick.
//!
//! # Two executors, one result
//!
//! [`sequential::run`] runs the phases as full passes on one thread and is
//! the reference result.  [`parallel::run`] splits the population into one
//! contiguous index range per worker and runs the same phases on a fixed
//! pool of persistent threads, with a full [`std::sync::Barrier`] rendezvous
//! after every phase — three waits per tick, the minimum that upholds the
//! ordering invariant.  For identical inputs the two executors produce
//! bit-identical populations; [`equivalence::first_mismatch`] is the oracle
//! that checks it.

pub mod engine;
pub mod equivalence;
pub mod error;
pub mod observer;
pub mod parallel;
pub mod partition;
pub mod sequential;

mod shared;

#[cfg(test)]
mod tests;

pub use equivalence::first_mismatch;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TickObserver};

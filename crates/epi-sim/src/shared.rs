//! Shared agent-slice view for the barrier-synchronized workers.
//!
//! # Why this exists
//!
//! A worker needs `&mut` access to its own partition during the move and
//! transition phases and shared read access to the *whole* population during
//! the infect phase.  Those borrows never overlap in time — the barrier
//! protocol separates the phases — but they do overlap in the type system,
//! so the view hands out short-lived, phase-scoped borrows from a raw slice
//! of `UnsafeCell`s and the barrier protocol is the safety argument.
//!
//! The contract the parallel executor upholds:
//!
//! 1. partitions tile the index space exactly once ([`crate::partition`]),
//!    so two workers' `span_mut` borrows never alias;
//! 2. every `span_mut` borrow is dropped before the worker reaches the next
//!    barrier, and `all` borrows exist only between the move barrier and the
//!    infect barrier, when no `span_mut` borrow exists anywhere;
//! 3. the only cross-partition *write* during `all` borrows is
//!    `Agent::mark_exposed`, an atomic store through `&Agent`.

use std::cell::UnsafeCell;
use std::ops::Range;

use epi_agent::Agent;

/// A `Sync` view over one population's agents, yielding per-phase borrows.
pub(crate) struct SharedAgents<'a> {
    cells: &'a [UnsafeCell<Agent>],
}

// SAFETY: `SharedAgents` only ever produces aliasing references under the
// phase/barrier contract above; with that contract held, no two threads
// access the same agent concurrently except through `Agent`'s atomic flag.
unsafe impl Sync for SharedAgents<'_> {}

impl<'a> SharedAgents<'a> {
    /// Wrap an exclusively-borrowed agent slice.  The exclusive borrow
    /// guarantees nothing else touches the agents for `'a`.
    pub(crate) fn new(agents: &'a mut [Agent]) -> Self {
        let len = agents.len();
        let ptr = agents.as_mut_ptr().cast::<UnsafeCell<Agent>>();
        // SAFETY: `UnsafeCell<T>` is `repr(transparent)` over `T`, and we
        // hold the unique `&mut` to the slice for 'a.
        let cells = unsafe { std::slice::from_raw_parts(ptr, len) };
        Self { cells }
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Exclusive borrow of one partition, for the move/transition phases.
    ///
    /// # Safety
    /// `span` must be the caller's own partition, no other `span_mut` for an
    /// overlapping range and no `all` borrow may be live, and the returned
    /// slice must be dropped before the caller's next barrier wait.
    pub(crate) unsafe fn span_mut(&self, span: Range<usize>) -> &mut [Agent] {
        debug_assert!(span.end <= self.cells.len());
        let ptr = self.cells.as_ptr().cast_mut().cast::<Agent>();
        // SAFETY: disjointness and lifetime are the caller's contract; the
        // pointer math stays inside the original allocation.
        unsafe { std::slice::from_raw_parts_mut(ptr.add(span.start), span.len()) }
    }

    /// Shared borrow of the whole population, for the infect phase.
    ///
    /// # Safety
    /// No `span_mut` borrow may be live anywhere (all workers must be past
    /// the move barrier and before the infect barrier), and the returned
    /// slice must be dropped before the caller's next barrier wait.
    pub(crate) unsafe fn all(&self) -> &[Agent] {
        let ptr = self.cells.as_ptr().cast::<Agent>();
        // SAFETY: same layout argument as `new`; exclusivity is the caller's
        // contract.
        unsafe { std::slice::from_raw_parts(ptr, self.cells.len()) }
    }
}

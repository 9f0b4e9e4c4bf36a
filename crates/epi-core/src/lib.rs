//! `epi-core` — foundational types for the `rust_epi` epidemic simulation.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and only one external one (`thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`ids`]      | `AgentId` (input-supplied identity)                  |
//! | [`grid`]     | `Position`, `GridBounds`                             |
//! | [`health`]   | `HealthStatus`, infection/immunity durations         |
//! | [`motion`]   | `Heading`, `MovementAxis`                            |
//! | [`time`]     | `Tick`, `RunConfig`                                  |
//! | [`error`]    | `EpiError`, `EpiResult`                              |

pub mod error;
pub mod grid;
pub mod health;
pub mod ids;
pub mod motion;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpiError, EpiResult};
pub use grid::{GridBounds, Position};
pub use health::{HealthStatus, INFECTED_TICKS, IMMUNE_TICKS};
pub use ids::AgentId;
pub use motion::{Heading, MovementAxis};
pub use time::{RunConfig, Tick};

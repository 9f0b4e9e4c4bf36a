//! `epi-agent` — agent state and the population store for `rust_epi`.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`record`]     | `AgentRecord` — the raw loader↔core interface record |
//! | [`agent`]      | `Agent` — per-agent state and its pure step ops      |
//! | [`population`] | `Population` — the fixed-size owned agent store      |
//!
//! A run owns two independent [`Population`]s built from the same records
//! (one per executor); they start element-wise identical and are compared
//! after both runs finish.

pub mod agent;
pub mod population;
pub mod record;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use population::Population;
pub use record::AgentRecord;

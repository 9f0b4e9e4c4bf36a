//! `epi-input` — scenario-file loading for `rust_epi`.
//!
//! A scenario file is plain text, space-delimited:
//!
//! ```text
//! <max_x> <max_y>
//! <agent_count>
//! <id> <x> <y> <status> <heading> <amplitude>      (× agent_count)
//! ```
//!
//! Loading is the run's entire failure surface: everything is validated here
//! (and re-validated at agent construction), and a single malformed record
//! aborts the load before any tick executes.

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{load_scenario, load_scenario_reader, Scenario};

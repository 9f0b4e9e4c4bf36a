//! Headings and movement axes.
//!
//! A scenario file gives each agent a cardinal heading plus a positive
//! amplitude magnitude.  At construction the pair collapses to a movement
//! axis and a *signed* amplitude; from then on the simulation only ever deals
//! with the (axis, amplitude) form, flipping the sign on boundary collisions.

use std::fmt;

use crate::{EpiError, EpiResult};

// ── Heading ───────────────────────────────────────────────────────────────────

/// Cardinal heading as given in the scenario file (codes 0-3 in N, S, E, W
/// order).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Decode a scenario-file heading code.
    pub fn from_code(code: i64) -> EpiResult<Self> {
        match code {
            0 => Ok(Heading::North),
            1 => Ok(Heading::South),
            2 => Ok(Heading::East),
            3 => Ok(Heading::West),
            other => Err(EpiError::InvalidDirection(other)),
        }
    }

    /// The wire code for this heading.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Heading::North => 0,
            Heading::South => 1,
            Heading::East => 2,
            Heading::West => 3,
        }
    }

    /// Collapse heading + positive magnitude into (axis, signed amplitude):
    /// North is up the vertical axis (negative y), South down it, East along
    /// the positive horizontal axis, West the negative.
    #[inline]
    pub fn decompose(self, magnitude: i32) -> (MovementAxis, i32) {
        match self {
            Heading::North => (MovementAxis::Vertical, -magnitude),
            Heading::South => (MovementAxis::Vertical, magnitude),
            Heading::East => (MovementAxis::Horizontal, magnitude),
            Heading::West => (MovementAxis::Horizontal, -magnitude),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::North => "north",
            Heading::South => "south",
            Heading::East => "east",
            Heading::West => "west",
        };
        f.write_str(s)
    }
}

// ── MovementAxis ──────────────────────────────────────────────────────────────

/// The axis an agent oscillates along, fixed at construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MovementAxis {
    Vertical,
    Horizontal,
}

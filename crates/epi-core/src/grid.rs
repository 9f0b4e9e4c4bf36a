//! Grid geometry: positions and the bounded rectangle agents move on.

use std::fmt;

use crate::{EpiError, EpiResult};

// ── Position ──────────────────────────────────────────────────────────────────

/// Integer grid coordinates.
///
/// A valid position satisfies `0 <= x <= max_x` and `0 <= y <= max_y` for the
/// run's [`GridBounds`]; construction and the reflection rules in the agent
/// model maintain this invariant for the whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── GridBounds ────────────────────────────────────────────────────────────────

/// The inclusive upper corner of the simulation rectangle.
///
/// The rectangle spans `[0, max_x] × [0, max_y]`.  Both bounds are positive;
/// [`GridBounds::new`] rejects anything else.  `GridBounds` is cheap to copy
/// and passed by value throughout the step engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GridBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl GridBounds {
    /// Validate and construct.  Both bounds must be strictly positive.
    pub fn new(max_x: i32, max_y: i32) -> EpiResult<Self> {
        if max_x <= 0 || max_y <= 0 {
            return Err(EpiError::Config(format!(
                "grid bounds must be positive, got ({max_x}, {max_y})"
            )));
        }
        Ok(Self { max_x, max_y })
    }

    /// `true` if `position` lies inside `[0, max_x] × [0, max_y]`.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x).contains(&position.x) && (0..=self.max_y).contains(&position.y)
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0, {}] x [0, {}]", self.max_x, self.max_y)
    }
}

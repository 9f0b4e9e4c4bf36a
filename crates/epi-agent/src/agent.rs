//! Per-agent state and the two pure step operations (movement, status
//! transition).
//!
//! # The exposure flag
//!
//! `exposed` is the only inter-phase communication channel: the infect phase
//! sets it, the transition phase of the *same tick* consumes it, and it must
//! never be touched outside those two phases.  It is atomic because during
//! the infect phase any worker may flag an agent outside its own partition —
//! every other field is written exclusively by the partition owner.  Relaxed
//! ordering is enough: the executor's phase barriers provide the
//! happens-before edges between the stores and the consuming reads.

use std::sync::atomic::{AtomicBool, Ordering};

use epi_core::{
    AgentId, EpiError, EpiResult, GridBounds, Heading, HealthStatus, MovementAxis, Position,
    IMMUNE_TICKS, INFECTED_TICKS,
};

use crate::AgentRecord;

/// One simulated agent.
///
/// Identity (`id`) and the movement axis are fixed at construction; position,
/// amplitude sign, and health state evolve tick by tick.  No agent is created
/// or destroyed during a run.
#[derive(Debug)]
pub struct Agent {
    pub id:       AgentId,
    pub position: Position,

    /// Axis the agent oscillates along, fixed at creation.
    pub axis: MovementAxis,

    /// Signed step applied each tick along `axis`; the sign flips on boundary
    /// collisions.
    pub amplitude: i32,

    pub status: HealthStatus,

    /// Pending-infection marker bridging the infect and transition phases of
    /// one tick.  See the module docs for why this one field is atomic.
    exposed: AtomicBool,

    /// Ticks left in Infected; meaningful only while `status` is Infected.
    pub infected_timer: u8,

    /// Ticks left in Immune; meaningful only while `status` is Immune.
    pub immune_timer: u8,

    /// Lifetime count of transitions into Infected.
    pub infections: u32,
}

impl Agent {
    /// Build an agent from a wire record, validating everything the record
    /// encoding allows to be wrong.
    ///
    /// Errors: `InvalidAmplitude` (magnitude <= 0), `InvalidDirection`
    /// (heading code outside 0..=3), `Parse` (status code outside 0..=2),
    /// `OutOfBounds` (initial position outside the grid).
    pub fn from_record(record: &AgentRecord, bounds: GridBounds) -> EpiResult<Self> {
        if record.amplitude <= 0 {
            return Err(EpiError::InvalidAmplitude(record.amplitude as i64));
        }
        let heading = Heading::from_code(record.heading as i64)?;
        let status = HealthStatus::from_code(record.status as i64)?;

        let position = Position::new(record.x, record.y);
        if !bounds.contains(position) {
            return Err(EpiError::OutOfBounds { position, bounds });
        }

        let (axis, amplitude) = heading.decompose(record.amplitude);

        // Both timers start at their full durations regardless of the initial
        // status; they only count down while the matching status is active.
        Ok(Self {
            id: AgentId(record.id),
            position,
            axis,
            amplitude,
            status,
            exposed:        AtomicBool::new(false),
            infected_timer: INFECTED_TICKS,
            immune_timer:   IMMUNE_TICKS,
            infections:     0,
        })
    }

    // ── Move phase ────────────────────────────────────────────────────────

    /// Apply one movement step with boundary reflection.
    ///
    /// The clamp rules run in a fixed order on the updated coordinates:
    /// `y < 0`, `y >= max_y`, `x < 0`, `x > max_x` — each clamps and negates
    /// the amplitude.  The horizontal upper edge fires only strictly *past*
    /// `max_x` while the vertical one fires *at* `max_y`; a reflected x may
    /// therefore legitimately come to rest at `max_x`.  The asymmetry is part
    /// of the output format contract.
    pub fn advance(&mut self, bounds: GridBounds) {
        let mut amplitude = self.amplitude;
        let Position { mut x, mut y } = self.position;

        match self.axis {
            MovementAxis::Vertical => y += amplitude,
            MovementAxis::Horizontal => x += amplitude,
        }

        if y < 0 {
            y = 0;
            amplitude = -amplitude;
        }
        if y >= bounds.max_y {
            y = bounds.max_y - 1;
            amplitude = -amplitude;
        }
        if x < 0 {
            x = 0;
            amplitude = -amplitude;
        }
        if x > bounds.max_x {
            x = bounds.max_x - 1;
            amplitude = -amplitude;
        }

        self.position = Position { x, y };
        self.amplitude = amplitude;
    }

    // ── Infect phase ──────────────────────────────────────────────────────

    /// Flag this agent for infection at the next transition phase.
    ///
    /// Callable through a shared reference: during the infect phase every
    /// worker scans the whole population and may flag agents it does not own.
    /// Concurrent stores all write `true`, so ordering between them is
    /// irrelevant.
    #[inline]
    pub fn mark_exposed(&self) {
        self.exposed.store(true, Ordering::Relaxed);
    }

    /// Read the pending-infection flag (infect-phase output; test hook).
    #[inline]
    pub fn is_exposed(&self) -> bool {
        self.exposed.load(Ordering::Relaxed)
    }

    // ── Transition phase ──────────────────────────────────────────────────

    /// Advance the health state machine by one tick, consuming the exposure
    /// flag if the agent is Susceptible.
    pub fn step_status(&mut self) {
        match self.status {
            HealthStatus::Susceptible => {
                if *self.exposed.get_mut() {
                    self.status = HealthStatus::Infected;
                    self.infected_timer = INFECTED_TICKS;
                    self.infections += 1;
                    *self.exposed.get_mut() = false;
                }
            }
            HealthStatus::Infected => {
                self.infected_timer -= 1;
                if self.infected_timer == 0 {
                    self.status = HealthStatus::Immune;
                    self.immune_timer = IMMUNE_TICKS;
                }
            }
            HealthStatus::Immune => {
                self.immune_timer -= 1;
                if self.immune_timer == 0 {
                    self.status = HealthStatus::Susceptible;
                }
            }
        }
    }
}

impl Clone for Agent {
    fn clone(&self) -> Self {
        Self {
            id:             self.id,
            position:       self.position,
            axis:           self.axis,
            amplitude:      self.amplitude,
            status:         self.status,
            exposed:        AtomicBool::new(self.exposed.load(Ordering::Relaxed)),
            infected_timer: self.infected_timer,
            immune_timer:   self.immune_timer,
            infections:     self.infections,
        }
    }
}

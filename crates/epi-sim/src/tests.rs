//! Integration tests for epi-sim: phase semantics, partitioning, and the
//! serial/parallel equivalence property.

use epi_agent::{AgentRecord, Population};
use epi_core::{GridBounds, HealthStatus, RunConfig, Tick};

use crate::{engine, equivalence, parallel, partition, sequential};
use crate::{NoopObserver, TickObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bounds(max_x: i32, max_y: i32) -> GridBounds {
    GridBounds::new(max_x, max_y).unwrap()
}

fn rec(id: u32, x: i32, y: i32, status: u8, heading: u8, amplitude: i32) -> AgentRecord {
    AgentRecord { id, x, y, status, heading, amplitude }
}

fn population(bounds: GridBounds, records: &[AgentRecord]) -> Population {
    Population::from_records(bounds, records).unwrap()
}

fn config(total_ticks: u64, workers: usize) -> RunConfig {
    RunConfig::new(total_ticks, workers).unwrap()
}

/// A population with crossing paths, edge bouncers, coincident starts, and
/// all three statuses — enough churn that a phase-ordering bug would show.
fn busy_population() -> Population {
    let bounds = bounds(12, 9);
    let records = vec![
        rec(1, 6, 2, 0, 1, 1),  // infected, south
        rec(2, 6, 4, 1, 0, 1),  // susceptible, north — meets agent 1
        rec(3, 0, 5, 1, 2, 3),  // susceptible, east
        rec(4, 12, 5, 1, 3, 2), // susceptible, west from the right edge
        rec(5, 3, 0, 0, 1, 2),  // infected, south from the top edge
        rec(6, 3, 8, 1, 0, 2),  // susceptible, north
        rec(7, 11, 1, 1, 2, 4), // susceptible, east — bounces off max_x
        rec(8, 1, 8, 2, 3, 1),  // immune, west
        rec(9, 6, 6, 1, 0, 2),  // susceptible, north
        rec(10, 6, 6, 0, 1, 2), // infected, same start cell as 9
        rec(11, 2, 2, 1, 1, 3), // susceptible, south
        rec(12, 9, 9, 2, 0, 3), // immune, north from the bottom edge
        rec(13, 5, 5, 1, 2, 1), // susceptible, east
        rec(14, 7, 5, 1, 3, 1), // susceptible, west — meets 13 head-on
    ];
    population(bounds, &records)
}

/// Full-state comparison, stricter than the equivalence oracle: the two
/// executors must agree on timers and amplitudes too.
fn assert_identical(a: &Population, b: &Population) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.agents().iter().zip(b.agents()).enumerate() {
        assert_eq!(x.id, y.id, "id diverged at index {i}");
        assert_eq!(x.position, y.position, "position diverged at index {i}");
        assert_eq!(x.status, y.status, "status diverged at index {i}");
        assert_eq!(x.infections, y.infections, "infections diverged at index {i}");
        assert_eq!(x.amplitude, y.amplitude, "amplitude diverged at index {i}");
        assert_eq!(x.infected_timer, y.infected_timer, "infected_timer diverged at index {i}");
        assert_eq!(x.immune_timer, y.immune_timer, "immune_timer diverged at index {i}");
    }
}

// ── Phase semantics ───────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn infection_uses_post_move_positions() {
        // The pair coincides at (5, 5) only AFTER the move phase.
        let bounds = bounds(10, 10);
        let mut population = population(
            bounds,
            &[
                rec(1, 5, 4, 0, 1, 1), // infected, south → (5, 5)
                rec(2, 5, 6, 1, 0, 1), // susceptible, north → (5, 5)
            ],
        );

        engine::move_span(population.agents_mut(), bounds);
        engine::infect_span(population.agents(), 0..population.len());

        let agents = population.agents();
        assert!(!agents[0].is_exposed(), "carrier is never flagged");
        assert!(agents[1].is_exposed(), "co-located susceptible is flagged");

        engine::transition_span(population.agents_mut());
        let agents = population.agents();
        assert_eq!(agents[1].status, HealthStatus::Infected);
        assert_eq!(agents[1].infected_timer, 3);
        assert_eq!(agents[1].infections, 1);
        assert!(!agents[1].is_exposed());
        // The carrier just counts down.
        assert_eq!(agents[0].status, HealthStatus::Infected);
        assert_eq!(agents[0].infected_timer, 2);
    }

    #[test]
    fn same_id_does_not_transmit() {
        // Two records sharing an id on the same cell: the self-check is by
        // id, not index, so neither flags the other.
        let bounds = bounds(10, 10);
        let mut population = population(
            bounds,
            &[rec(7, 5, 4, 0, 1, 1), rec(7, 5, 6, 1, 0, 1)],
        );
        engine::move_span(population.agents_mut(), bounds);
        engine::infect_span(population.agents(), 0..population.len());
        assert!(!population.agents()[1].is_exposed());
    }

    #[test]
    fn immune_agents_are_not_flagged() {
        let bounds = bounds(10, 10);
        let mut population = population(
            bounds,
            &[rec(1, 5, 4, 0, 1, 1), rec(2, 5, 6, 2, 0, 1)],
        );
        engine::move_span(population.agents_mut(), bounds);
        engine::infect_span(population.agents(), 0..population.len());
        assert!(!population.agents()[1].is_exposed());
    }

    #[test]
    fn infect_scans_beyond_its_span() {
        // Carrier at index 0, victim at index 1; restrict the span to the
        // carrier only — the victim must still be flagged.
        let bounds = bounds(10, 10);
        let mut population = population(
            bounds,
            &[rec(1, 5, 4, 0, 1, 1), rec(2, 5, 6, 1, 0, 1)],
        );
        engine::move_span(population.agents_mut(), bounds);
        engine::infect_span(population.agents(), 0..1);
        assert!(population.agents()[1].is_exposed());
    }
}

// ── Status cycle timing ───────────────────────────────────────────────────────

#[cfg(test)]
mod cycle_tests {
    use super::*;

    #[test]
    fn infected_immune_susceptible_after_three_ticks_each() {
        // A lone carrier, never re-exposed.
        let mut population = population(bounds(10, 10), &[rec(1, 5, 5, 0, 1, 1)]);

        sequential::run(&mut population, &config(3, 1), &mut NoopObserver);
        assert_eq!(population.agents()[0].status, HealthStatus::Immune);

        sequential::run(&mut population, &config(3, 1), &mut NoopObserver);
        assert_eq!(population.agents()[0].status, HealthStatus::Susceptible);
    }

    #[test]
    fn still_infected_through_tick_two() {
        let mut population = population(bounds(10, 10), &[rec(1, 5, 5, 0, 1, 1)]);
        sequential::run(&mut population, &config(2, 1), &mut NoopObserver);
        assert_eq!(population.agents()[0].status, HealthStatus::Infected);
        assert_eq!(population.agents()[0].infected_timer, 1);
    }
}

// ── The two-agent crossing scenario ───────────────────────────────────────────

#[cfg(test)]
mod crossing_tests {
    use super::*;

    #[test]
    fn coincident_start_diverges_before_infection_can_happen() {
        // Both start at (5, 5), but infection reads post-move positions:
        // after the move phase they sit at (5, 6) and (5, 4), so no
        // transmission occurs on tick 1 (or ever — they oscillate in
        // antiphase).
        let mut population = population(
            bounds(10, 10),
            &[
                rec(1, 5, 5, 0, 1, 1), // infected, south
                rec(2, 5, 5, 1, 0, 1), // susceptible, north
            ],
        );

        sequential::run(&mut population, &config(1, 1), &mut NoopObserver);

        let agents = population.agents();
        assert_eq!(agents[0].position, epi_core::Position::new(5, 6));
        assert_eq!(agents[0].status, HealthStatus::Infected);
        assert_eq!(agents[0].infected_timer, 2);

        assert_eq!(agents[1].position, epi_core::Position::new(5, 4));
        assert_eq!(agents[1].status, HealthStatus::Susceptible);
        assert_eq!(agents[1].infections, 0);
    }
}

// ── Partitioning ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod partition_tests {
    use super::*;
    use crate::partition::covers_exactly;

    #[test]
    fn remainder_goes_to_last_range() {
        let ranges = partition::split(10, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn even_split() {
        let ranges = partition::split(8, 4);
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn more_workers_than_agents() {
        let ranges = partition::split(3, 5);
        assert_eq!(ranges.len(), 5);
        assert!(ranges[..4].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[4], 0..3);
        assert!(covers_exactly(&ranges, 3));
    }

    #[test]
    fn single_worker_takes_everything() {
        assert_eq!(partition::split(7, 1), vec![0..7]);
    }

    #[test]
    fn empty_population() {
        let ranges = partition::split(0, 2);
        assert!(covers_exactly(&ranges, 0));
    }

    #[test]
    fn cover_check_rejects_gaps_and_overlaps() {
        assert!(covers_exactly(&[0..4, 4..9], 9));
        assert!(!covers_exactly(&[0..4, 5..9], 9), "gap");
        assert!(!covers_exactly(&[0..5, 4..9], 9), "overlap");
        assert!(!covers_exactly(&[0..4, 4..8], 9), "short");
    }
}

// ── Equivalence oracle ────────────────────────────────────────────────────────

#[cfg(test)]
mod equivalence_tests {
    use super::*;

    #[test]
    fn identical_populations_match() {
        let a = busy_population();
        let b = a.clone();
        assert_eq!(equivalence::first_mismatch(&a, &b), None);
    }

    #[test]
    fn position_difference_is_reported_at_first_index() {
        let a = busy_population();
        let mut b = a.clone();
        b.agents_mut()[3].position.x += 1;
        assert_eq!(equivalence::first_mismatch(&a, &b), Some(3));
    }

    #[test]
    fn infection_count_difference_is_reported() {
        let a = busy_population();
        let mut b = a.clone();
        b.agents_mut()[5].infections += 1;
        assert_eq!(equivalence::first_mismatch(&a, &b), Some(5));
    }

    #[test]
    fn timers_are_not_compared() {
        let a = busy_population();
        let mut b = a.clone();
        b.agents_mut()[0].infected_timer = 1;
        b.agents_mut()[2].immune_timer = 1;
        assert_eq!(equivalence::first_mismatch(&a, &b), None);
    }
}

// ── Sequential executor ───────────────────────────────────────────────────────

#[cfg(test)]
mod sequential_tests {
    use super::*;

    #[test]
    fn zero_ticks_is_identity() {
        let before = busy_population();
        let mut after = before.clone();
        sequential::run(&mut after, &config(0, 1), &mut NoopObserver);
        assert_identical(&before, &after);
    }

    #[test]
    fn observer_sees_every_tick_in_order() {
        struct Recorder(Vec<Tick>);
        impl TickObserver for Recorder {
            fn on_tick_end(&mut self, tick: Tick, _population: &Population) {
                self.0.push(tick);
            }
        }

        let mut population = busy_population();
        let mut recorder = Recorder(Vec::new());
        sequential::run(&mut population, &config(5, 1), &mut recorder);
        let expected: Vec<Tick> = (0..5).map(Tick).collect();
        assert_eq!(recorder.0, expected);
    }
}

// ── Parallel executor ─────────────────────────────────────────────────────────

#[cfg(test)]
mod parallel_tests {
    use super::*;

    #[test]
    fn matches_sequential_for_many_worker_counts() {
        let base = busy_population();
        let ticks = 30;

        let mut reference = base.clone();
        sequential::run(&mut reference, &config(ticks, 1), &mut NoopObserver);

        // Includes W = 1, counts that do not divide the population, and
        // W > population.
        for workers in [1, 2, 3, 4, 7, 20] {
            let mut candidate = base.clone();
            parallel::run(&mut candidate, &config(ticks, workers)).unwrap();
            assert_eq!(
                equivalence::first_mismatch(&reference, &candidate),
                None,
                "parallel run with {workers} workers diverged"
            );
            assert_identical(&reference, &candidate);
        }
    }

    #[test]
    fn zero_ticks_is_identity() {
        let before = busy_population();
        let mut after = before.clone();
        parallel::run(&mut after, &config(0, 4)).unwrap();
        assert_identical(&before, &after);
    }

    #[test]
    fn transmission_crosses_partition_boundaries() {
        // Two agents, two workers: each partition holds one agent, and the
        // carrier must flag the susceptible agent in the other partition.
        let mut population = population(
            bounds(10, 10),
            &[
                rec(1, 5, 4, 0, 1, 1), // worker 0: infected → (5, 5)
                rec(2, 5, 6, 1, 0, 1), // worker 1: susceptible → (5, 5)
            ],
        );
        parallel::run(&mut population, &config(1, 2)).unwrap();
        let victim = &population.agents()[1];
        assert_eq!(victim.status, HealthStatus::Infected);
        assert_eq!(victim.infections, 1);
    }

    #[test]
    fn zero_workers_is_a_config_error() {
        // Bypasses RunConfig::new on purpose.
        let config = RunConfig { total_ticks: 1, workers: 0 };
        let mut population = busy_population();
        assert!(parallel::run(&mut population, &config).is_err());
    }
}

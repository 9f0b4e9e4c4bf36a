//! Unit tests for epi-core primitives.

#[cfg(test)]
mod grid {
    use crate::{GridBounds, Position};

    #[test]
    fn bounds_reject_non_positive() {
        assert!(GridBounds::new(0, 10).is_err());
        assert!(GridBounds::new(10, 0).is_err());
        assert!(GridBounds::new(-3, 5).is_err());
        assert!(GridBounds::new(1, 1).is_ok());
    }

    #[test]
    fn contains_is_inclusive_on_both_edges() {
        let bounds = GridBounds::new(10, 8).unwrap();
        assert!(bounds.contains(Position::new(0, 0)));
        assert!(bounds.contains(Position::new(10, 8)));
        assert!(!bounds.contains(Position::new(11, 8)));
        assert!(!bounds.contains(Position::new(10, 9)));
        assert!(!bounds.contains(Position::new(-1, 0)));
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(5, 7).to_string(), "(5, 7)");
    }
}

#[cfg(test)]
mod health {
    use crate::HealthStatus;

    #[test]
    fn code_roundtrip() {
        for code in 0..=2 {
            let status = HealthStatus::from_code(code).unwrap();
            assert_eq!(status.code() as i64, code);
        }
    }

    #[test]
    fn zero_is_infected() {
        // Wire code order is infected, susceptible, immune.
        assert_eq!(HealthStatus::from_code(0).unwrap(), HealthStatus::Infected);
        assert_eq!(
            HealthStatus::from_code(1).unwrap(),
            HealthStatus::Susceptible
        );
        assert_eq!(HealthStatus::from_code(2).unwrap(), HealthStatus::Immune);
    }

    #[test]
    fn unknown_code_rejected() {
        assert!(HealthStatus::from_code(3).is_err());
        assert!(HealthStatus::from_code(-1).is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(HealthStatus::Infected.to_string(), "INFECTED");
        assert_eq!(HealthStatus::Susceptible.to_string(), "SUSCEPTIBLE");
        assert_eq!(HealthStatus::Immune.to_string(), "IMMUNE");
    }
}

#[cfg(test)]
mod motion {
    use crate::{EpiError, Heading, MovementAxis};

    #[test]
    fn heading_code_roundtrip() {
        for code in 0..=3 {
            let heading = Heading::from_code(code).unwrap();
            assert_eq!(heading.code() as i64, code);
        }
    }

    #[test]
    fn unknown_heading_is_invalid_direction() {
        match Heading::from_code(4) {
            Err(EpiError::InvalidDirection(4)) => {}
            other => panic!("expected InvalidDirection(4), got {other:?}"),
        }
    }

    #[test]
    fn decompose_signs() {
        assert_eq!(
            Heading::North.decompose(2),
            (MovementAxis::Vertical, -2)
        );
        assert_eq!(Heading::South.decompose(2), (MovementAxis::Vertical, 2));
        assert_eq!(
            Heading::East.decompose(2),
            (MovementAxis::Horizontal, 2)
        );
        assert_eq!(
            Heading::West.decompose(2),
            (MovementAxis::Horizontal, -2)
        );
    }
}

#[cfg(test)]
mod time {
    use crate::{RunConfig, Tick};

    #[test]
    fn tick_arithmetic_and_display() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn config_rejects_zero_workers() {
        assert!(RunConfig::new(10, 0).is_err());
    }

    #[test]
    fn config_allows_zero_ticks() {
        let config = RunConfig::new(0, 4).unwrap();
        assert_eq!(config.total_ticks, 0);
        assert_eq!(config.workers, 4);
    }
}

use fastrand::Rng;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::engagement::{EngagementError, EngagementOutcome, resolve_engagement};
use crate::jet::JetFighter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DogfightConfig {
    pub start_distance: f64,
    /// How far the fighters close between exchanges.
    pub closure_step: f64,
    /// Each exchange's burst duration is drawn uniformly from [0, max_burst_secs).
    pub max_burst_secs: f64,
    pub min_distance: f64,
}

impl Default for DogfightConfig {
    fn default() -> Self {
        Self {
            start_distance: 1000.0,
            closure_step: 50.0,
            max_burst_secs: 10.0,
            min_distance: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DogfightError {
    InvalidClosureStep(f64),
    Engagement(EngagementError),
}

impl fmt::Display for DogfightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DogfightError::InvalidClosureStep(step) => {
                write!(f, "closure step must be positive (got {})", step)
            }
            DogfightError::Engagement(err) => write!(f, "engagement failed: {}", err),
        }
    }
}

impl Error for DogfightError {}

impl From<EngagementError> for DogfightError {
    fn from(err: EngagementError) -> Self {
        DogfightError::Engagement(err)
    }
}

/// How a dogfight ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DogfightEnding {
    /// One side's health reached zero.
    Destroyed { victor: String, defeated: String },
    /// One side ran out of cannon rounds and broke off.
    Disengaged { fighter: String },
    /// The fighters closed to minimum distance with both still flying.
    RangeClosed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogfightReport {
    pub rounds_fought: u32,
    pub ending: DogfightEnding,
    pub exchanges: Vec<EngagementOutcome>,
}

/// Runs exchanges at steadily decreasing range until one side is destroyed,
/// runs dry, or the distance floor is reached.
pub fn run_dogfight(
    left: &mut JetFighter,
    right: &mut JetFighter,
    config: &DogfightConfig,
    rng: &mut Rng,
) -> Result<DogfightReport, DogfightError> {
    if !(config.closure_step > 0.0) || !config.closure_step.is_finite() {
        return Err(DogfightError::InvalidClosureStep(config.closure_step));
    }

    info!("{}", left);
    info!("{}", right);
    info!(
        "dogfight initiated at a starting distance of {}",
        config.start_distance
    );

    let mut exchanges = Vec::new();
    let mut distance = config.start_distance;
    let ending = loop {
        if distance <= config.min_distance {
            break DogfightEnding::RangeClosed;
        }

        let duration = rng.f64() * config.max_burst_secs;
        info!(
            "both jets fired cannons for {:.2} seconds at a distance of {}",
            duration, distance
        );

        let outcome = resolve_engagement(left, right, distance, duration, rng)?;
        debug!("{:?}", outcome);

        for side in [&outcome.left, &outcome.right] {
            if side.was_hit {
                info!(
                    "{}: health={:.1}, ammo={}, took {:.1} damage",
                    side.name, side.health, side.ammo_remaining, side.damage_applied
                );
            } else {
                info!(
                    "{}: health={:.1}, ammo={}, untouched this pass",
                    side.name, side.health, side.ammo_remaining
                );
            }
        }

        let left_dry = outcome.left.ammo_remaining == 0;
        let right_dry = outcome.right.ammo_remaining == 0;
        exchanges.push(outcome);

        if left.is_destroyed() {
            info!("the {} has destroyed the {}", right.name(), left.name());
            break DogfightEnding::Destroyed {
                victor: right.name().to_string(),
                defeated: left.name().to_string(),
            };
        }
        if right.is_destroyed() {
            info!("the {} has destroyed the {}", left.name(), right.name());
            break DogfightEnding::Destroyed {
                victor: left.name().to_string(),
                defeated: right.name().to_string(),
            };
        }
        if left_dry {
            info!("the {} is out of ammo and disengages", left.name());
            break DogfightEnding::Disengaged {
                fighter: left.name().to_string(),
            };
        }
        if right_dry {
            info!("the {} is out of ammo and disengages", right.name());
            break DogfightEnding::Disengaged {
                fighter: right.name().to_string(),
            };
        }

        distance -= config.closure_step;
    };

    Ok(DogfightReport {
        rounds_fought: exchanges.len() as u32,
        ending,
        exchanges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jet::JetModel;

    fn harmless(name: &str, ammo: u32) -> JetFighter {
        // Zero damage per round: can fire forever without ever killing.
        JetFighter::new(name, ammo, 50.0, 45.0, 0.0, 0.07)
    }

    #[test]
    fn rejects_non_positive_closure_step() {
        let mut left = harmless("left", 1_000_000);
        let mut right = harmless("right", 1_000_000);
        let config = DogfightConfig {
            closure_step: 0.0,
            ..DogfightConfig::default()
        };
        let mut rng = Rng::with_seed(1);

        let err = run_dogfight(&mut left, &mut right, &config, &mut rng).unwrap_err();
        assert_eq!(err, DogfightError::InvalidClosureStep(0.0));
    }

    #[test]
    fn closes_range_when_nobody_scores() {
        let mut left = harmless("left", 1_000_000);
        let mut right = harmless("right", 1_000_000);
        let config = DogfightConfig::default();
        let mut rng = Rng::with_seed(7);

        let report = run_dogfight(&mut left, &mut right, &config, &mut rng).unwrap();

        assert_eq!(report.ending, DogfightEnding::RangeClosed);
        // 1000 down to just above 0 in steps of 50.
        assert_eq!(report.rounds_fought, 20);
        assert_eq!(left.health(), 100.0);
        assert_eq!(right.health(), 100.0);
    }

    #[test]
    fn dry_fighter_disengages() {
        let mut left = harmless("left", 0);
        let mut right = harmless("right", 1_000_000);
        let config = DogfightConfig::default();
        let mut rng = Rng::with_seed(11);

        let report = run_dogfight(&mut left, &mut right, &config, &mut rng).unwrap();

        assert_eq!(
            report.ending,
            DogfightEnding::Disengaged {
                fighter: "left".to_string()
            }
        );
        assert_eq!(report.rounds_fought, 1);
    }

    #[test]
    fn lopsided_fight_ends_in_destruction() {
        // Tight spread keeps the hunter at certain-hit range for the whole
        // approach; one connecting burst is lethal.
        let mut hunter = JetFighter::new("hunter", 1_000_000, 1000.0, 45.0, 100.0, 0.001);
        let mut target = harmless("target", 1_000_000);
        let config = DogfightConfig::default();
        let mut rng = Rng::with_seed(13);

        let report = run_dogfight(&mut hunter, &mut target, &config, &mut rng).unwrap();

        assert_eq!(
            report.ending,
            DogfightEnding::Destroyed {
                victor: "hunter".to_string(),
                defeated: "target".to_string(),
            }
        );
        assert!(target.is_destroyed());
        assert_eq!(hunter.health(), 100.0);
    }

    #[test]
    fn same_seed_reproduces_the_whole_fight() {
        let run = |seed: u64| {
            let mut left = JetFighter::of_model(JetModel::F16);
            let mut right = JetFighter::of_model(JetModel::F18);
            let mut rng = Rng::with_seed(seed);
            run_dogfight(&mut left, &mut right, &DogfightConfig::default(), &mut rng).unwrap()
        };

        let first = run(21);
        let second = run(21);
        assert_eq!(first, second);
        assert!(first.rounds_fought >= 1);
    }
}

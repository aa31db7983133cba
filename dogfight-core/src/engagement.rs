use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::gunnery::hit_probabilities;
use crate::jet::JetFighter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngagementError {
    InvalidDistance(f64),
    InvalidDuration(f64),
}

impl EngagementError {
    pub fn message(&self) -> &'static str {
        match self {
            EngagementError::InvalidDistance(_) => "distance must be finite and non-negative",
            EngagementError::InvalidDuration(_) => "duration must be finite and non-negative",
        }
    }
}

impl fmt::Display for EngagementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngagementError::InvalidDistance(value) | EngagementError::InvalidDuration(value) => {
                write!(f, "{} (got {})", self.message(), value)
            }
        }
    }
}

impl Error for EngagementError {}

/// One side's view of a resolved exchange. `was_hit` and `damage_applied`
/// describe fire received, not fire delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterOutcome {
    pub name: String,
    pub ammo_remaining: u32,
    pub health: f64,
    pub was_hit: bool,
    pub damage_applied: f64,
    pub rounds_fired: u32,
    pub out_of_ammo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementOutcome {
    pub left: FighterOutcome,
    pub right: FighterOutcome,
}

/// Resolves one simultaneous exchange of cannon fire.
///
/// Each side rolls once against its hit probability, fires for the full
/// duration, and applies damage proportional to the rounds that actually left
/// the cannon. A side that fired zero rounds cannot score a hit. The fighters
/// are borrowed for the call only; re-invoking with the same inputs draws
/// fresh rolls from `rng`.
pub fn resolve_engagement(
    left: &mut JetFighter,
    right: &mut JetFighter,
    distance: f64,
    duration: f64,
    rng: &mut Rng,
) -> Result<EngagementOutcome, EngagementError> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(EngagementError::InvalidDistance(distance));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(EngagementError::InvalidDuration(duration));
    }

    let (p_left, p_right) = hit_probabilities(left, right, distance);

    // Pilot skill rolls, one per side.
    let left_roll = rng.f64();
    let right_roll = rng.f64();

    let left_burst = left.shoot(duration);
    let right_burst = right.shoot(duration);

    let left_connects = left_burst.rounds_fired > 0 && left_roll <= p_left;
    let right_connects = right_burst.rounds_fired > 0 && right_roll <= p_right;

    let damage_to_right = if left_connects {
        left.damage_for(left_burst.rounds_fired)
    } else {
        0.0
    };
    let damage_to_left = if right_connects {
        right.damage_for(right_burst.rounds_fired)
    } else {
        0.0
    };

    right.deduct_health(damage_to_right);
    left.deduct_health(damage_to_left);

    Ok(EngagementOutcome {
        left: FighterOutcome {
            name: left.name().to_string(),
            ammo_remaining: left_burst.ammo_remaining,
            health: left.health(),
            was_hit: right_connects,
            damage_applied: damage_to_left,
            rounds_fired: left_burst.rounds_fired,
            out_of_ammo: left_burst.out_of_ammo,
        },
        right: FighterOutcome {
            name: right.name().to_string(),
            ammo_remaining: right_burst.ammo_remaining,
            health: right.health(),
            was_hit: left_connects,
            damage_applied: damage_to_right,
            rounds_fired: right_burst.rounds_fired,
            out_of_ammo: right_burst.out_of_ammo,
        },
    })
}

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

pub const FULL_HEALTH: f64 = 100.0;

/// Closed set of fighter presets. Adding an airframe means adding a variant
/// and a row in `JetFighter::of_model`, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JetModel {
    F16,
    F18,
    F22,
}

impl JetModel {
    pub const ALL: [JetModel; 3] = [JetModel::F16, JetModel::F18, JetModel::F22];

    pub fn designation(self) -> &'static str {
        match self {
            JetModel::F16 => "F16",
            JetModel::F18 => "F18",
            JetModel::F22 => "F22",
        }
    }
}

/// Result of one trigger pull: how many rounds actually left the cannon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotBurst {
    pub rounds_fired: u32,
    pub ammo_remaining: u32,
    /// True when the magazine cut the burst short (including firing on empty).
    pub out_of_ammo: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JetFighter {
    name: String,
    health: f64,
    max_health: f64,
    cannon_ammo: u32,
    fire_rate: f64,
    wingspan: f64,
    damage_per_round: f64,
    cannon_spread_rads: f64,
    cross_sectional_area: f64,
}

impl JetFighter {
    pub fn new(
        name: impl Into<String>,
        cannon_ammo: u32,
        fire_rate: f64,
        wingspan: f64,
        damage_per_round: f64,
        cannon_spread_rads: f64,
    ) -> Self {
        let radius = wingspan / 2.0;
        Self {
            name: name.into(),
            health: FULL_HEALTH,
            max_health: FULL_HEALTH,
            cannon_ammo,
            fire_rate,
            wingspan,
            damage_per_round,
            cannon_spread_rads,
            cross_sectional_area: PI * radius * radius,
        }
    }

    pub fn of_model(model: JetModel) -> Self {
        let name = model.designation();
        match model {
            JetModel::F16 => Self::new(name, 3000, 80.0, 45.0, 0.05, 4f64.to_radians()),
            JetModel::F18 => Self::new(name, 4000, 50.0, 50.0, 0.30, 6f64.to_radians()),
            JetModel::F22 => Self::new(name, 2000, 60.0, 60.0, 0.80, 2f64.to_radians()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn cannon_ammo(&self) -> u32 {
        self.cannon_ammo
    }

    pub fn fire_rate(&self) -> f64 {
        self.fire_rate
    }

    pub fn wingspan(&self) -> f64 {
        self.wingspan
    }

    pub fn damage_per_round(&self) -> f64 {
        self.damage_per_round
    }

    pub fn cannon_spread_rads(&self) -> f64 {
        self.cannon_spread_rads
    }

    pub fn cross_sectional_area(&self) -> f64 {
        self.cross_sectional_area
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    /// Reduces health, clamped at 0. Destroyed is a valid terminal state,
    /// never an error.
    pub fn deduct_health(&mut self, amount: f64) -> f64 {
        self.health = (self.health - amount).max(0.0);
        self.health
    }

    /// Restores health, capped at the construction-time maximum.
    pub fn add_health(&mut self, amount: f64) -> f64 {
        self.health = (self.health + amount).min(self.max_health);
        self.health
    }

    /// Fires the cannon for `duration` seconds. Rounds fired is
    /// `round(fire_rate * duration)` clamped to whatever ammunition remains.
    pub fn shoot(&mut self, duration: f64) -> ShotBurst {
        let requested = (self.fire_rate * duration).round() as u32;
        let fired = requested.min(self.cannon_ammo);
        self.cannon_ammo -= fired;
        ShotBurst {
            rounds_fired: fired,
            ammo_remaining: self.cannon_ammo,
            out_of_ammo: fired < requested,
        }
    }

    pub fn damage_for(&self, rounds: u32) -> f64 {
        rounds as f64 * self.damage_per_round
    }
}

impl fmt::Display for JetFighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: health={}%, ammo={}, fire rate={} rounds/sec, wingspan={} ft, \
             damage per round={}%, cannon spread={:.2} deg",
            self.name,
            self.health,
            self.cannon_ammo,
            self.fire_rate,
            self.wingspan,
            self.damage_per_round * 100.0,
            self.cannon_spread_rads.to_degrees(),
        )
    }
}

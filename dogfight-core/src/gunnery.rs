use std::f64::consts::PI;

use crate::jet::JetFighter;

/// Area covered by a cannon's dispersion cone at the given range.
pub fn spread_area(spread_rads: f64, distance: f64) -> f64 {
    let radius = spread_rads.tan() * distance;
    PI * radius * radius
}

/// Probability that `attacker`'s fire connects with `defender` at `distance`.
///
/// Certain hit when the dispersion cone is no larger than the target; beyond
/// that the probability falls off with the inverse square of distance. A zero
/// distance collapses the cone to a point and saturates at 1.0 rather than
/// dividing by zero.
pub fn hit_probability(attacker: &JetFighter, defender: &JetFighter, distance: f64) -> f64 {
    let spread = spread_area(attacker.cannon_spread_rads(), distance);
    let target = defender.cross_sectional_area();
    if spread <= target {
        1.0
    } else {
        target / spread
    }
}

/// Both sides' probabilities against each other's cross-section.
pub fn hit_probabilities(left: &JetFighter, right: &JetFighter, distance: f64) -> (f64, f64) {
    (
        hit_probability(left, right, distance),
        hit_probability(right, left, distance),
    )
}

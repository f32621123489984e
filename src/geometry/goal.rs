//! Arm tip against goal regions.

use geo::Euclidean;
use geo::algorithm::Distance;

use super::types::{Circle, Point};

/// Checks whether the arm tip lies within any goal, boundary included.
///
/// Only the terminal point is tested, by direct distance to each goal center.
pub fn tip_in_any_goal(tip: Point, goals: &[Circle]) -> bool {
    let tip = tip.to_geo();
    goals
        .iter()
        .any(|goal| Euclidean.distance(tip, goal.center().to_geo()) <= goal.radius)
}

//! Arm collision against obstacles or goals.

use super::intersect::segment_intersects_circle;
use super::types::{Circle, LinkPlacement, ObjectKind};

/// Determines whether any arm link touches any of the given circles.
///
/// Links are visited in order and, for each link, objects in order; the first hit
/// ends the search. With [`ObjectKind::Obstacle`] each link's padding inflates the
/// circle, with [`ObjectKind::Goal`] the padding is zero.
///
/// # Arguments
///
/// * `links` - Placed arm links
/// * `objects` - Obstacles or goals
/// * `kind` - How to interpret `objects`
///
/// # Returns
///
/// `true` if at least one (link, object) pair intersects. Empty inputs give `false`.
pub fn arm_collides(links: &[LinkPlacement], objects: &[Circle], kind: ObjectKind) -> bool {
    links.iter().any(|link| {
        let padding = match kind {
            ObjectKind::Obstacle => link.padding,
            ObjectKind::Goal => 0.0,
        };
        objects
            .iter()
            .any(|&object| segment_intersects_circle(link.tip, link.base, padding, object))
    })
}

/// Shorthand for [`arm_collides`] in obstacle mode.
pub fn arm_hits_obstacle(links: &[LinkPlacement], obstacles: &[Circle]) -> bool {
    arm_collides(links, obstacles, ObjectKind::Obstacle)
}

/// Shorthand for [`arm_collides`] in goal mode.
pub fn arm_touches_goal(links: &[LinkPlacement], goals: &[Circle]) -> bool {
    arm_collides(links, goals, ObjectKind::Goal)
}

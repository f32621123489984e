//! Segment-circle intersection tests and link clearance.

use geo::algorithm::Distance;
use geo::{Euclidean, Line};

use super::types::{Circle, Point};

/// Checks whether the segment from `base` to `tip` meets the circle inflated by `padding`.
///
/// The segment is taken as `P(t) = base + t * (tip - base)` with `t` in `[0, 1]`, the
/// circle as radius `circle.radius + padding`. Substituting `P(t)` into the circle
/// equation gives a quadratic in `t`; the segment hits when the discriminant is
/// non-negative and one of its roots lies in `[0, 1]`.
///
/// Only crossings of the inflated boundary are detected. A segment lying strictly
/// inside the circle has both roots outside `[0, 1]` and is reported as not touching.
///
/// A zero-length segment (`base == tip`) has no quadratic; it is tested as a single
/// point, inclusive of the boundary.
///
/// # Arguments
///
/// * `tip` - Free end of the segment
/// * `base` - Fixed end of the segment
/// * `padding` - Clearance added to the circle radius
/// * `circle` - Circle to test against
///
/// # Returns
///
/// `true` if the segment crosses or touches the inflated circle boundary.
pub fn segment_intersects_circle(tip: Point, base: Point, padding: f64, circle: Circle) -> bool {
    // Shift so the circle center is the origin. Subtract in f64, i32 differences can overflow.
    let tip_x = f64::from(tip.x) - f64::from(circle.x);
    let tip_y = f64::from(tip.y) - f64::from(circle.y);
    let base_x = f64::from(base.x) - f64::from(circle.x);
    let base_y = f64::from(base.y) - f64::from(circle.y);
    let reach = circle.radius + padding;

    let dist_sq = (base_y - tip_y).powi(2) + (base_x - tip_x).powi(2);
    if dist_sq < f64::EPSILON {
        return tip_x.powi(2) + tip_y.powi(2) <= reach.powi(2);
    }

    let seg_co = 2.0 * (tip_x * (base_x - tip_x) + tip_y * (base_y - tip_y));
    let r_diff = tip_x.powi(2) + tip_y.powi(2) - reach.powi(2);

    let quad = seg_co.powi(2) - 4.0 * dist_sq * r_diff;
    if quad < 0.0 {
        return false;
    }

    let root = quad.sqrt();
    let t1 = (-seg_co + root) / (2.0 * dist_sq);
    let t2 = (-seg_co - root) / (2.0 * dist_sq);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// Calculates the minimum distance between a link segment and a circle's edge.
///
/// Negative values mean the circle center is closer to the segment than the radius,
/// so the segment overlaps the circle (including when it lies fully inside).
///
/// # Arguments
///
/// * `base` - Starting point of the segment
/// * `tip` - Ending point of the segment
/// * `circle` - Circle to measure against
///
/// # Returns
///
/// Euclidean distance from the segment to the circle center, minus the radius.
pub fn segment_clearance(base: Point, tip: Point, circle: Circle) -> f64 {
    let center = circle.center().to_geo();
    let line = Line::new(base.to_geo(), tip.to_geo());
    Euclidean.distance(&center, &line) - circle.radius
}

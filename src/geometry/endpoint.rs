//! Link endpoint solver.

use super::types::Point;

/// Computes where a link ends, given where it starts, its length and its angle.
///
/// The angle is in degrees, counter-clockwise from the positive x-axis. Because the
/// workspace y-axis points down, the vertical offset is subtracted. Both offsets are
/// truncated toward zero, not rounded.
///
/// Coordinates that would leave the `i32` range saturate at `i32::MIN` / `i32::MAX`.
///
/// # Arguments
///
/// * `start` - Base of the link
/// * `length` - Length of the link
/// * `angle_degrees` - Link angle in degrees
///
/// # Returns
///
/// The tip of the link.
pub fn compute_endpoint(start: Point, length: u32, angle_degrees: i32) -> Point {
    let angle = f64::from(angle_degrees).to_radians();
    let length = f64::from(length);
    let dx = (angle.cos() * length).trunc();
    let dy = (angle.sin() * length).trunc();

    // Float to int casts saturate.
    Point::new(
        (f64::from(start.x) + dx) as i32,
        (f64::from(start.y) - dy) as i32,
    )
}

#![allow(missing_docs)]

use armcheck::geometry::endpoint::compute_endpoint;
use armcheck::geometry::types::Point;

#[test]
fn test_reference_endpoints() {
    let start = Point::new(150, 190);

    assert_eq!(compute_endpoint(start, 100, 20), Point::new(243, 156));
    assert_eq!(compute_endpoint(start, 100, 40), Point::new(226, 126));
    assert_eq!(compute_endpoint(start, 100, 60), Point::new(200, 104));
    assert_eq!(compute_endpoint(start, 100, 160), Point::new(57, 156));
}

#[test]
fn test_axis_aligned_angles() {
    let origin = Point::new(0, 0);

    // y grows downward, so 90 degrees points up the screen
    assert_eq!(compute_endpoint(origin, 10, 0), Point::new(10, 0));
    assert_eq!(compute_endpoint(origin, 10, 90), Point::new(0, -10));
    assert_eq!(compute_endpoint(origin, 10, 180), Point::new(-10, 0));
    assert_eq!(compute_endpoint(origin, 10, 270), Point::new(0, 10));
    assert_eq!(compute_endpoint(origin, 10, 360), Point::new(10, 0));
}

#[test]
fn test_offsets_truncate_toward_zero() {
    let origin = Point::new(0, 0);

    // cos(200) * 10 = -9.40, sin(200) * 10 = -3.42
    assert_eq!(compute_endpoint(origin, 10, 200), Point::new(-9, 3));
    // +-7.07 on both axes
    assert_eq!(compute_endpoint(origin, 10, 135), Point::new(-7, -7));
    assert_eq!(compute_endpoint(origin, 10, -45), Point::new(7, 7));
}

#[test]
fn test_zero_length_stays_at_start() {
    let start = Point::new(50, 50);
    assert_eq!(compute_endpoint(start, 0, 33), start);
}

#[test]
fn test_endpoint_is_deterministic() {
    let start = Point::new(12, 34);
    let first = compute_endpoint(start, 77, 123);
    for _ in 0..10 {
        assert_eq!(compute_endpoint(start, 77, 123), first);
    }
}

#[test]
fn test_endpoint_saturates_at_i32_range() {
    assert_eq!(
        compute_endpoint(Point::new(i32::MAX - 5, 0), 100, 0),
        Point::new(i32::MAX, 0)
    );
    // 90 degrees moves toward smaller y
    assert_eq!(
        compute_endpoint(Point::new(0, i32::MIN + 5), 100, 90),
        Point::new(0, i32::MIN)
    );
    assert_eq!(
        compute_endpoint(Point::new(i32::MIN + 5, 0), 100, 180),
        Point::new(i32::MIN, 0)
    );
}

#[test]
fn test_length_beyond_i32_range() {
    assert_eq!(
        compute_endpoint(Point::new(-2_000_000_000, 0), 3_000_000_000, 0),
        Point::new(1_000_000_000, 0)
    );
    assert_eq!(
        compute_endpoint(Point::new(0, 0), u32::MAX, 0),
        Point::new(i32::MAX, 0)
    );
}

//! Value types for points, circles, links and the workspace.
//!
//! Coordinates are integer pixels with the y-axis pointing down (screen convention).

use serde::{Deserialize, Serialize};

/// An integer point in workspace coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a floating point `geo` point for distance computations.
    pub fn to_geo(self) -> geo::Point<f64> {
        geo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A circular region: an obstacle or a goal.
///
/// For obstacles `radius` is the bare obstacle radius; the clearance is carried by
/// the link ([`LinkPlacement::padding`]). For goals `radius` is the reach radius
/// and no padding is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center x coordinate.
    pub x: i32,
    /// Center y coordinate.
    pub y: i32,
    /// Radius, expected non-negative.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle from its center and radius.
    pub const fn new(x: i32, y: i32, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Center of the circle.
    pub const fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<(i32, i32, f64)> for Circle {
    fn from((x, y, radius): (i32, i32, f64)) -> Self {
        Self { x, y, radius }
    }
}

/// One arm link placed in the workspace, with its collision clearance.
///
/// Base and tip are arbitrary points; nothing ties their distance to a nominal
/// link length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkPlacement {
    /// Joint the link starts from.
    pub base: Point,
    /// Free end of the link.
    pub tip: Point,
    /// Clearance added to obstacle radii, i.e. the half-thickness of the link.
    pub padding: f64,
}

impl LinkPlacement {
    /// Creates a link placement.
    pub const fn new(base: Point, tip: Point, padding: f64) -> Self {
        Self { base, tip, padding }
    }

    /// The bare `(base, tip)` segment, as consumed by the boundary check.
    pub const fn segment(&self) -> (Point, Point) {
        (self.base, self.tip)
    }
}

/// The rectangle `[0, width] x [0, height]`, inclusive on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Right edge.
    pub width: i32,
    /// Bottom edge.
    pub height: i32,
}

impl Workspace {
    /// Creates a workspace of the given size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// What the circles passed to [`crate::geometry::collision::arm_collides`] stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Obstacles: each link's padding inflates the radius.
    Obstacle,
    /// Goals: exact reach, padding is ignored.
    Goal,
}

//! # Armcheck - Collision Predicates for a Planar Arm
//!
//! Geometric checks for a multi-link rigid arm moving in a rectangular workspace
//! populated with circular obstacles and circular goal regions. A link is a straight
//! segment from a base point to a tip point; links are chained end-to-start by the
//! caller, which typically is a search or planning loop that queries these predicates
//! thousands of times per run.
//!
//! ## Features
//!
//! - Link endpoint from base, length and angle (truncating, screen coordinates)
//! - Padded segment-circle intersection via quadratic root analysis
//! - Arm-vs-obstacle and arm-vs-goal collision checks
//! - Tip-in-goal and workspace containment checks
//! - Scene files (JSON) and parallel evaluation of many arm configurations
//!
//! ## Core Modules
//!
//! - [`geometry::endpoint`] - Link endpoint solver
//! - [`geometry::intersect`] - Segment-circle intersection
//! - [`geometry::collision`] - Arm collision against obstacles or goals
//! - [`geometry::goal`] - Arm tip against goal regions
//! - [`geometry::boundary`] - Workspace containment
//! - [`scene`] - Static environment, batch evaluation and persistence

/// Pure geometric predicates over small value types.
pub mod geometry {
    /// Workspace containment of arm links.
    pub mod boundary;
    /// Collision of arm links with obstacles or goals.
    pub mod collision;
    /// Endpoint of a single link from its base, length and angle.
    pub mod endpoint;
    /// Whether the arm tip lies inside a goal region.
    pub mod goal;
    /// Segment-circle intersection and clearance.
    pub mod intersect;
    /// Value types shared by all predicates.
    ///
    /// [`types::Point`], [`types::Circle`], [`types::LinkPlacement`] and
    /// [`types::Workspace`] are all `Copy` and never mutated by any predicate.
    pub mod types;
}

/// Obstacles, goals and workspace bundled for repeated arm queries.
pub mod scene;

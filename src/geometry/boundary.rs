//! Workspace containment of arm links.

use super::types::{Point, Workspace};

/// Checks whether a point lies in `[0, width] x [0, height]`.
pub fn point_within_workspace(point: Point, workspace: Workspace) -> bool {
    (0..=workspace.width).contains(&point.x) && (0..=workspace.height).contains(&point.y)
}

/// Determines whether every link endpoint stays inside the workspace.
///
/// Bounds are inclusive on all four sides. Stops at the first endpoint outside;
/// an arm with no links is trivially inside.
///
/// # Arguments
///
/// * `links` - `(base, tip)` pairs of all arm links, e.g. a slice iterator or an array
/// * `workspace` - Workspace rectangle
///
/// # Returns
///
/// `true` if all endpoints of all links are within bounds.
pub fn arm_within_workspace<I>(links: I, workspace: Workspace) -> bool
where
    I: IntoIterator<Item = (Point, Point)>,
{
    links.into_iter().all(|(base, tip)| {
        point_within_workspace(base, workspace) && point_within_workspace(tip, workspace)
    })
}

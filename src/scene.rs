//! Static environment for repeated arm queries.
//!
//! A [`Scene`] bundles the workspace with its obstacles and goals so a planner can
//! evaluate candidate arm configurations against it, one at a time or in parallel.
//! Scenes are stored as pretty-printed JSON.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::boundary::arm_within_workspace;
use crate::geometry::collision::{arm_hits_obstacle, arm_touches_goal};
use crate::geometry::goal::tip_in_any_goal;
use crate::geometry::types::{Circle, LinkPlacement, Point, Workspace};

/// One arm configuration: links chained base to tip, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arm {
    /// Placed links.
    pub links: Vec<LinkPlacement>,
}

impl Arm {
    /// Creates an arm from its placed links.
    pub fn new(links: Vec<LinkPlacement>) -> Self {
        Self { links }
    }

    /// Free end of the outermost link, `None` for an arm without links.
    pub fn tip(&self) -> Option<Point> {
        self.links.last().map(|link| link.tip)
    }

    /// `(base, tip)` pairs of all links.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.links.iter().map(LinkPlacement::segment)
    }
}

/// Outcome of every predicate for one arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmStatus {
    /// Some padded link meets an obstacle.
    pub hits_obstacle: bool,
    /// Some bare link meets a goal.
    pub links_touch_goal: bool,
    /// The arm tip lies inside a goal.
    pub tip_in_goal: bool,
    /// All link endpoints are inside the workspace.
    pub within_workspace: bool,
}

impl ArmStatus {
    /// Whether a planner may keep this configuration.
    ///
    /// The arm must stay in the workspace, avoid every obstacle, and may only pass
    /// through a goal if its tip ends inside one.
    pub fn is_valid(&self) -> bool {
        self.within_workspace
            && !self.hits_obstacle
            && (!self.links_touch_goal || self.tip_in_goal)
    }

    /// Whether this configuration is valid and reaches a goal.
    pub fn is_goal(&self) -> bool {
        self.is_valid() && self.tip_in_goal
    }
}

/// Workspace, obstacles and goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Allowed region for every link endpoint.
    pub workspace: Workspace,
    /// Circles links must keep their padding away from.
    pub obstacles: Vec<Circle>,
    /// Circles the arm tip should reach.
    pub goals: Vec<Circle>,
}

impl Scene {
    /// Creates a scene.
    pub fn new(workspace: Workspace, obstacles: Vec<Circle>, goals: Vec<Circle>) -> Self {
        Self {
            workspace,
            obstacles,
            goals,
        }
    }

    /// Runs all predicates on one arm.
    pub fn evaluate(&self, arm: &Arm) -> ArmStatus {
        ArmStatus {
            hits_obstacle: arm_hits_obstacle(&arm.links, &self.obstacles),
            links_touch_goal: arm_touches_goal(&arm.links, &self.goals),
            tip_in_goal: arm
                .tip()
                .is_some_and(|tip| tip_in_any_goal(tip, &self.goals)),
            within_workspace: arm_within_workspace(arm.segments(), self.workspace),
        }
    }

    /// Evaluates many arms in parallel. Results follow the order of `arms`.
    pub fn evaluate_all(&self, arms: &[Arm]) -> Vec<ArmStatus> {
        arms.par_iter().map(|arm| self.evaluate(arm)).collect()
    }

    /// Saves the scene to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a scene from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let scene = serde_json::from_str(&json)?;
        Ok(scene)
    }
}

/// A scene together with arm configurations to check against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    /// Environment.
    pub scene: Scene,
    /// Configurations to evaluate.
    #[serde(default)]
    pub arms: Vec<Arm>,
}

impl SceneFile {
    /// Evaluates every arm in the file against its scene.
    pub fn evaluate(&self) -> Vec<ArmStatus> {
        self.scene.evaluate_all(&self.arms)
    }

    /// Saves the scene and arms to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a scene and arms from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let file = serde_json::from_str(&json)?;
        Ok(file)
    }
}

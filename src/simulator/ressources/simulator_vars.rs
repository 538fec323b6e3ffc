//! Ressources used by the graph simulator.

use glam::Vec2;
use std::collections::HashSet;

/// How strong nodes should push others away.
#[derive(Default)]
pub struct RepelForce(pub f32);

/// How strong edges pull their endpoints together.
#[derive(Default)]
pub struct SpringStiffness(pub f32);

/// How strong the pull to the center should be.
#[derive(Default)]
pub struct GravityForce(pub f32);

/// Amount of damping that should be applied to the node's movement.
#[derive(Default)]
pub struct Damping(pub f32);

/// Size of the viewport the graph is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

impl WorldSize {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Node types that take part in the simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    /// No filter applied, every type is visible.
    #[default]
    All,
    /// Only the listed types are visible.
    Only(HashSet<String>),
}

impl KindFilter {
    pub fn allows(&self, kind: &str) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(kinds) => kinds.contains(kind),
        }
    }
}

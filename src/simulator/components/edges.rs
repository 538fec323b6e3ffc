//! Components which make up an edge

use specs::{Component, Entity, VecStorage};

/// An edge connects exactly two nodes.
///
/// Edges have no rest length and no stiffness of their own; the pull is
/// governed by the global [`SpringStiffness`](crate::simulator::ressources::simulator_vars::SpringStiffness).
#[derive(Component, Debug)]
#[storage(VecStorage)]
pub struct Connects {
    pub src: Entity,
    pub target: Entity,
}

//! Components which make up a node

use glam::Vec2;
use specs::{Component, NullStorage, VecStorage};

/// The dataset id of a node.
#[derive(Component, Debug, Clone)]
#[storage(VecStorage)]
pub struct NodeId(pub String);

/// The type tag of a node, checked against the visibility filter.
#[derive(Component, Debug, Clone)]
#[storage(VecStorage)]
pub struct NodeKind(pub String);

/// The position of a node in canvas coordinates.
#[derive(Component, Debug, Default)]
#[storage(VecStorage)]
pub struct Position(pub Vec2);

/// The velocity of a node.
#[derive(Component, Debug, Default)]
#[storage(VecStorage)]
pub struct Velocity(pub Vec2);

/// The net force computed for a node during the last tick.
#[derive(Component, Debug, Default)]
#[storage(VecStorage)]
pub struct NodeForces(pub Vec2);

/// A dragged node is positioned by the user. It keeps pushing and pulling
/// other nodes but is skipped by the integrator.
#[derive(Component, Default)]
#[storage(NullStorage)]
pub struct Dragged;

/// A hidden node or edge is filtered out and takes no part in the simulation.
#[derive(Component, Default)]
#[storage(NullStorage)]
pub struct Hidden;

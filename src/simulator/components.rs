//! The ECS components of the simulator. Nodes and edges are bundles of components.

pub mod edges;
pub mod nodes;

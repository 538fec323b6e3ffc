//! Continuous force-directed layout for news knowledge graphs.
//!
//! The [`Simulator`](simulator::Simulator) owns the node/edge state, the
//! tuning coefficients and a two-state frame loop. The host feeds it frames
//! through a [`FrameScheduler`](scheduler::FrameScheduler) and reads back
//! positions after every tick.
//!
//! # Example
//! ```no_run
//!use newsgraph::prelude::*;
//!
//!let data = GraphData::from_cytoscape_json(
//!    r#"{"nodes": [{"data": {"id": "p1", "label": "Alice", "type": "Person"}},
//!                  {"data": {"id": "o1", "label": "ACME", "type": "Organization"}}],
//!        "edges": [{"data": {"source": "p1", "target": "o1", "label": "works for"}}]}"#,
//!)
//!.unwrap();
//!
//!let mut simulator = Simulator::builder()
//!    .world_size(800.0, 600.0)
//!    .build(ManualFrames::default());
//!
//!simulator.load_data(&data);
//!simulator.advance_by(60);
//!
//!for (id, position) in simulator.positions() {
//!    println!("{id}: {position}");
//!}
//! ```

pub mod graph_data;
mod quadtree;
pub mod scheduler;
pub mod simulator;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::graph_data::{EdgeSpec, GraphData, NodeSpec};
    pub use crate::scheduler::{FrameHandle, FrameScheduler, ManualFrames, RunState};
    pub use crate::simulator::many_body::{BarnesHut, ManyBodyForce, Pairwise};
    pub use crate::simulator::ressources::events::SimulatorEvent;
    pub use crate::simulator::{
        GraphStats, NodeState, SimulationConfig, Simulator, SimulatorBuilder,
    };
    pub use glam::Vec2;
}

//! Runs the layout headlessly on a news graph and logs its progress.
//!
//! ```sh
//! RUST_LOG=info cargo run --example news_graph -- path/to/graph.json
//! ```
//! Without a path the bundled test fixture is used.

use std::{env, fs, process};

use log::{error, info};
use newsgraph::prelude::*;

const FRAMES: usize = 600;
const BUNDLED: &str = include_str!("../tests/fixtures/news_graph.json");

fn load(path: Option<String>) -> Result<GraphData, Box<dyn std::error::Error>> {
    let json = match path {
        Some(path) => fs::read_to_string(path)?,
        None => BUNDLED.to_string(),
    };
    Ok(GraphData::from_cytoscape_json(&json)?)
}

fn main() {
    env_logger::init();

    let data = match load(env::args().nth(1)) {
        Ok(data) => data,
        Err(err) => {
            error!("Failed to read graph: {err}");
            process::exit(1);
        }
    };

    let mut simulator = Simulator::builder()
        .world_size(1280.0, 720.0)
        .build(ManualFrames::default());
    simulator.load_data(&data);
    info!("{:?}", simulator.stats());

    for frame in 1..=FRAMES {
        simulator.advance();
        if frame % 100 == 0 {
            let speed = simulator
                .active_nodes()
                .iter()
                .filter_map(|id| simulator.node(id))
                .map(|node| node.velocity.length())
                .fold(0.0f32, f32::max);
            info!("Frame {frame}: max speed {speed:.4}");
        }
    }

    simulator.set_visibility(["Person", "Organization"]);
    simulator.advance_by(100);
    info!("People and organizations only: {:?}", simulator.stats());

    for (id, position) in simulator.positions() {
        info!("{id}: ({:.1}, {:.1})", position.x, position.y);
    }
    simulator.stop();
}

pub mod components;
pub mod many_body;
pub mod ressources;
pub mod systems;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::f32::consts::TAU;

use crate::graph_data::GraphData;
use crate::scheduler::{FrameHandle, FrameScheduler, ManualFrames, RunState};
use crate::simulator::{
    components::{
        edges::Connects,
        nodes::{Dragged, Hidden, NodeForces, NodeId, NodeKind, Position, Velocity},
    },
    many_body::{BarnesHut, ManyBodyForce, Pairwise},
    ressources::{
        events::SimulatorEvent,
        simulator_vars::{Damping, GravityForce, KindFilter, RepelForce, SpringStiffness, WorldSize},
    },
    systems::{
        event_manager::EventManager,
        force_compute::{ComputeEdgeForces, ComputeGravityForce, ComputeNodeForce},
        position_update::UpdateNodePosition,
        visibility::ApplyVisibility,
    },
};
use glam::Vec2;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use specs::shrev::EventChannel;
use specs::{Builder, Dispatcher, DispatcherBuilder, Entity, RunNow, World, WorldExt};

/// Tuning coefficients of the force model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Strength of the inverse-square repulsion between nodes.
    pub repulsion: f32,
    /// Spring constant of every edge.
    pub attraction: f32,
    /// Factor applied to the velocity after adding the force.
    ///
    /// `1.0` -> no damping, `0.0` -> no movement.
    pub damping: f32,
    /// Pull towards the center of the viewport.
    pub center_gravity: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            repulsion: 5000.0,
            attraction: 0.01,
            damping: 0.85,
            center_gravity: 0.01,
        }
    }
}

/// Snapshot of a single node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Net force of the last tick the node took part in.
    pub force: Vec2,
    pub dragging: bool,
    pub hidden: bool,
}

/// Counts over the active participants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Active nodes per type tag.
    pub kinds: BTreeMap<String, usize>,
}

/// Continuous force-directed layout of one graph.
///
/// Every fired frame runs one tick: queued [`SimulatorEvent`]s are applied,
/// then repulsion, edge attraction and center gravity are computed for all
/// visible nodes and integrated into new positions.
pub struct Simulator<'a, 'b, F: FrameScheduler = ManualFrames> {
    world: World,
    dispatcher: Dispatcher<'a, 'b>,
    frames: F,
    state: RunState,
    pending: Option<FrameHandle>,
    ticks: u64,
    nodes: Vec<Entity>,
    edges: Vec<Entity>,
    index: HashMap<String, Entity>,
    rng: StdRng,
}

impl<'a, 'b> Simulator<'a, 'b, ManualFrames> {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }

    /// Fires the armed frame, if any. Returns whether a frame was fired.
    pub fn advance(&mut self) -> bool {
        match self.frames.fire() {
            Some(handle) => {
                self.on_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Fires up to `frames` frames and returns how many were fired.
    pub fn advance_by(&mut self, frames: usize) -> usize {
        let mut fired = 0;
        while fired < frames && self.advance() {
            fired += 1;
        }
        fired
    }
}

impl<'a, 'b, F: FrameScheduler> Simulator<'a, 'b, F> {
    /// Replaces the simulated graph and (re)starts the loop.
    ///
    /// Nodes are placed uniformly at random in a disc around the viewport
    /// center. Duplicate node ids and repeated `(source, label, target)`
    /// relations keep their first occurrence. Edges referencing unknown ids
    /// are dropped.
    pub fn load_data(&mut self, data: &GraphData) {
        self.stop();
        self.world.delete_all();
        self.world.maintain();
        self.nodes.clear();
        self.edges.clear();
        self.index.clear();

        let world_size = *self.world.read_resource::<WorldSize>();
        let center = world_size.center();
        let radius = 0.3 * world_size.width.min(world_size.height);

        for node in &data.nodes {
            if self.index.contains_key(&node.id) {
                warn!("Duplicate node id {:?}, keeping the first one", node.id);
                continue;
            }
            let angle = self.rng.gen_range(0.0..TAU);
            let distance = radius * self.rng.gen::<f32>().sqrt();
            let position = center + Vec2::from_angle(angle) * distance;

            let entity = self
                .world
                .create_entity()
                .with(NodeId(node.id.clone()))
                .with(NodeKind(node.kind.clone()))
                .with(Position(position))
                .with(Velocity::default())
                .with(NodeForces::default())
                .build();
            self.nodes.push(entity);
            self.index.insert(node.id.clone(), entity);
        }

        let mut relations = HashSet::new();
        for edge in &data.edges {
            let (Some(&src), Some(&target)) =
                (self.index.get(&edge.source), self.index.get(&edge.target))
            else {
                warn!(
                    "Dropping edge {:?} -> {:?}: unknown endpoint",
                    edge.source, edge.target
                );
                continue;
            };
            let relation = (
                edge.source.as_str(),
                edge.label.as_deref(),
                edge.target.as_str(),
            );
            if !relations.insert(relation) {
                warn!(
                    "Duplicate edge {:?} -[{:?}]-> {:?}, keeping the first one",
                    edge.source, edge.label, edge.target
                );
                continue;
            }
            let entity = self
                .world
                .create_entity()
                .with(Connects { src, target })
                .build();
            self.edges.push(entity);
        }

        self.apply_visibility();
        info!(
            "Loaded {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        self.start();
    }

    /// Starts the frame loop from tick 0, restarting it if it already runs.
    pub fn start(&mut self) {
        if self.state == RunState::Running {
            self.stop();
        }
        self.state = RunState::Running;
        self.ticks = 0;
        self.pending = Some(self.frames.request_frame());
        debug!("Simulation started");
    }

    /// Stops the frame loop. Calling it while stopped does nothing.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.frames.cancel_frame(handle);
        }
        if self.state == RunState::Running {
            debug!("Simulation stopped after {} ticks", self.ticks);
        }
        self.state = RunState::Stopped;
    }

    /// Frame callback. Runs one tick and re-arms the next frame, unless the
    /// loop was stopped or `handle` is not the frame armed last.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.state != RunState::Running || self.pending != Some(handle) {
            trace!("Ignoring stale frame {handle:?}");
            return;
        }
        self.pending = None;
        self.tick();
        self.pending = Some(self.frames.request_frame());
    }

    /// Runs a single physics step.
    ///
    /// This bypasses the frame loop and its run state: it steps a stopped
    /// simulator too. Hosts that hand positioning to a static layout after
    /// [`stop`](Self::stop) must not call it.
    pub fn tick(&mut self) {
        self.dispatcher.dispatch(&self.world);
        self.world.maintain();
        self.ticks += 1;
        trace!("Tick {}", self.ticks);
    }

    /// Ticks run since the last start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    /// Notify simulator that the user started dragging a node.
    pub fn drag_start(&mut self, id: &str) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        debug!("[{id}] Drag start");
        if let Err(err) = self.world.write_storage::<Dragged>().insert(entity, Dragged) {
            warn!("[{id}] Drag start failed: {err}");
        }
    }

    /// Notify simulator that the user released a node. The node resumes
    /// integration from rest.
    pub fn drag_end(&mut self, id: &str) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        debug!("[{id}] Drag end");
        self.world.write_storage::<Dragged>().remove(entity);
        if let Err(err) = self
            .world
            .write_storage::<Velocity>()
            .insert(entity, Velocity(Vec2::ZERO))
        {
            warn!("[{id}] Resetting velocity failed: {err}");
        }
    }

    /// Moves a node to the pointer position.
    pub fn drag_to(&mut self, id: &str, position: Vec2) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        trace!("[{id}] Dragged to {position}");
        if let Err(err) = self
            .world
            .write_storage::<Position>()
            .insert(entity, Position(position))
        {
            warn!("[{id}] Drag failed: {err}");
        }
    }

    /// Only nodes whose type is in `kinds` take part in the simulation.
    /// The loop keeps its state.
    pub fn set_visibility<I, S>(&mut self, kinds: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kinds: HashSet<String> = kinds.into_iter().map(Into::into).collect();
        debug!("Visible kinds: {kinds:?}");
        *self.world.write_resource::<KindFilter>() = KindFilter::Only(kinds);
        self.apply_visibility();
    }

    /// Removes the type filter.
    pub fn show_all_kinds(&mut self) {
        debug!("Visible kinds: all");
        *self.world.write_resource::<KindFilter>() = KindFilter::All;
        self.apply_visibility();
    }

    fn apply_visibility(&mut self) {
        ApplyVisibility.run_now(&self.world);
        self.world.maintain();
    }

    /// Ids of the visible nodes in load order.
    pub fn active_nodes(&self) -> Vec<String> {
        let ids = self.world.read_storage::<NodeId>();
        let hidden = self.world.read_storage::<Hidden>();
        self.nodes
            .iter()
            .filter(|entity| !hidden.contains(**entity))
            .filter_map(|entity| ids.get(*entity))
            .map(|id| id.0.clone())
            .collect()
    }

    /// `(source, target)` ids of the visible edges in load order.
    pub fn active_edges(&self) -> Vec<(String, String)> {
        let ids = self.world.read_storage::<NodeId>();
        let hidden = self.world.read_storage::<Hidden>();
        let connections = self.world.read_storage::<Connects>();
        self.edges
            .iter()
            .filter(|entity| !hidden.contains(**entity))
            .filter_map(|entity| connections.get(*entity))
            .filter_map(|connects| {
                let src = ids.get(connects.src)?;
                let target = ids.get(connects.target)?;
                Some((src.0.clone(), target.0.clone()))
            })
            .collect()
    }

    pub fn stats(&self) -> GraphStats {
        let kinds_storage = self.world.read_storage::<NodeKind>();
        let hidden = self.world.read_storage::<Hidden>();

        let mut kinds = BTreeMap::new();
        let mut node_count = 0;
        for kind in self
            .nodes
            .iter()
            .filter(|entity| !hidden.contains(**entity))
            .filter_map(|entity| kinds_storage.get(*entity))
        {
            node_count += 1;
            *kinds.entry(kind.0.clone()).or_insert(0) += 1;
        }
        let edge_count = self
            .edges
            .iter()
            .filter(|entity| !hidden.contains(**entity))
            .count();

        GraphStats {
            node_count,
            edge_count,
            kinds,
        }
    }

    pub fn node(&self, id: &str) -> Option<NodeState> {
        let entity = *self.index.get(id)?;
        let position = self.world.read_storage::<Position>().get(entity)?.0;
        let velocity = self.world.read_storage::<Velocity>().get(entity)?.0;
        let force = self
            .world
            .read_storage::<NodeForces>()
            .get(entity)
            .map(|force| force.0)
            .unwrap_or_default();

        Some(NodeState {
            position,
            velocity,
            force,
            dragging: self.world.read_storage::<Dragged>().contains(entity),
            hidden: self.world.read_storage::<Hidden>().contains(entity),
        })
    }

    /// Positions of the visible nodes in load order.
    pub fn positions(&self) -> Vec<(String, Vec2)> {
        let ids = self.world.read_storage::<NodeId>();
        let positions = self.world.read_storage::<Position>();
        let hidden = self.world.read_storage::<Hidden>();
        self.nodes
            .iter()
            .filter(|entity| !hidden.contains(**entity))
            .filter_map(|entity| Some((ids.get(*entity)?.0.clone(), positions.get(*entity)?.0)))
            .collect()
    }

    /// Updates the viewport. Gravity pulls towards the new center from the
    /// next tick on.
    pub fn resize(&mut self, width: f32, height: f32) {
        debug!("Resized to {width}x{height}");
        *self.world.write_resource::<WorldSize>() = WorldSize { width, height };
    }

    /// Coefficients in effect. Values sent since the last tick are not
    /// included yet.
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            repulsion: self.world.read_resource::<RepelForce>().0,
            attraction: self.world.read_resource::<SpringStiffness>().0,
            damping: self.world.read_resource::<Damping>().0,
            center_gravity: self.world.read_resource::<GravityForce>().0,
        }
    }

    /// Replaces all coefficients, starting with the next tick.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.send(SimulatorEvent::RepelForceUpdated(config.repulsion));
        self.send(SimulatorEvent::SpringStiffnessUpdated(config.attraction));
        self.send(SimulatorEvent::DampingUpdated(config.damping));
        self.send(SimulatorEvent::GravityForceUpdated(config.center_gravity));
    }

    /// Queues a tuning event. It is applied at the start of the next tick.
    pub fn send(&mut self, event: SimulatorEvent) {
        self.world
            .write_resource::<EventChannel<SimulatorEvent>>()
            .single_write(event);
    }

    fn entity(&self, id: &str) -> Option<Entity> {
        let entity = self.index.get(id).copied();
        if entity.is_none() {
            warn!("Unknown node id {id:?}");
        }
        entity
    }
}

/// Builder for [`Simulator`].
#[derive(Default)]
pub struct SimulatorBuilder {
    config: SimulationConfig,
    many_body: Option<Box<dyn ManyBodyForce>>,
    world_size: WorldSize,
    visible_kinds: Option<HashSet<String>>,
    seed: Option<u64>,
}

impl SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all coefficients at once.
    pub fn config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// How strong nodes should push others away.
    ///
    /// Default: `5000.0`
    pub fn repel_force(mut self, repel_force: f32) -> Self {
        self.config.repulsion = repel_force;
        self
    }

    /// How strong edges pull their endpoints together.
    ///
    /// Default: `0.01`
    pub fn spring_stiffness(mut self, spring_stiffness: f32) -> Self {
        self.config.attraction = spring_stiffness;
        self
    }

    /// How strong the pull to the center should be.
    ///
    /// Default: `0.01`
    pub fn gravity_force(mut self, gravity_force: f32) -> Self {
        self.config.center_gravity = gravity_force;
        self
    }

    /// Amount of damping that should be applied to the node's movement
    ///
    /// `1.0` -> No Damping
    ///
    /// `0.0` -> No Movement
    ///
    /// Default: `0.85`
    pub fn damping(mut self, damping: f32) -> Self {
        self.config.damping = damping;
        self
    }

    /// How accurate the repulsion should be.
    /// Higher numbers result in more approximations but faster calculations.
    ///
    /// `0.0` -> No approximation -> n^2 brute force
    ///
    /// Default: `0.0`
    pub fn simulation_accuracy(mut self, theta: f32) -> Self {
        let model: Box<dyn ManyBodyForce> = if theta > 0.0 {
            Box::new(BarnesHut::new(theta))
        } else {
            Box::new(Pairwise)
        };
        self.many_body = Some(model);
        self
    }

    /// Computes the repulsion with a custom model.
    pub fn many_body_force(mut self, model: impl ManyBodyForce + 'static) -> Self {
        self.many_body = Some(Box::new(model));
        self
    }

    /// Initial viewport.
    ///
    /// Default: `1280.0` x `720.0`
    pub fn world_size(mut self, width: f32, height: f32) -> Self {
        self.world_size = WorldSize { width, height };
        self
    }

    /// Initial type filter. Without it every type is visible.
    pub fn visible_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible_kinds = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Seeds the initial node placement. Seeded from entropy otherwise.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Constructs a stopped instance of `Simulator` driven by `frames`.
    pub fn build<'a, 'b, F: FrameScheduler>(self, frames: F) -> Simulator<'a, 'b, F> {
        let many_body: Box<dyn ManyBodyForce> = match self.many_body {
            Some(model) => model,
            None => Box::new(Pairwise),
        };

        let mut world = World::new();
        let mut dispatcher = DispatcherBuilder::new()
            .with(EventManager::default(), "event_manager", &[])
            .with(
                ComputeNodeForce::new(many_body),
                "calc_node_force",
                &["event_manager"],
            )
            .with(
                ComputeEdgeForces,
                "update_edge_forces",
                &["calc_node_force"],
            )
            .with(
                ComputeGravityForce,
                "calc_gravity_force",
                &["update_edge_forces"],
            )
            .with(
                UpdateNodePosition,
                "update_node_position",
                &["calc_gravity_force"],
            )
            .build();

        dispatcher.setup(&mut world);
        world.register::<NodeId>();
        world.register::<NodeKind>();
        world.register::<Connects>();
        world.register::<Dragged>();
        world.register::<Hidden>();

        world.insert(RepelForce(self.config.repulsion));
        world.insert(SpringStiffness(self.config.attraction));
        world.insert(GravityForce(self.config.center_gravity));
        world.insert(Damping(self.config.damping));
        world.insert(self.world_size);
        world.insert(match self.visible_kinds {
            Some(kinds) => KindFilter::Only(kinds),
            None => KindFilter::All,
        });

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Simulator {
            world,
            dispatcher,
            frames,
            state: RunState::Stopped,
            pending: None,
            ticks: 0,
            nodes: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_data::{EdgeSpec, NodeSpec};

    /// Frame source that records every call.
    #[derive(Default)]
    struct RecordingFrames {
        next_id: u64,
        requested: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    impl FrameScheduler for RecordingFrames {
        fn request_frame(&mut self) -> FrameHandle {
            self.next_id += 1;
            let handle = FrameHandle(self.next_id);
            self.requested.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.cancelled.push(handle);
        }
    }

    fn pair() -> GraphData {
        GraphData::new(
            vec![NodeSpec::new("a", "Person"), NodeSpec::new("b", "Place")],
            vec![EdgeSpec::new("a", "b")],
        )
    }

    #[test]
    fn new_simulator_is_stopped() {
        let simulator = Simulator::builder().build(RecordingFrames::default());
        assert_eq!(simulator.state(), RunState::Stopped);
        assert!(simulator.frames().requested.is_empty());
    }

    #[test]
    fn stale_frames_are_ignored_after_restart() {
        let mut simulator = Simulator::builder().seed(1).build(RecordingFrames::default());
        simulator.load_data(&pair());
        let first = simulator.frames().requested[0];

        simulator.start();
        assert_eq!(simulator.frames().cancelled, vec![first]);

        simulator.on_frame(first);
        assert_eq!(simulator.ticks(), 0);

        let current = *simulator.frames().requested.last().unwrap();
        simulator.on_frame(current);
        assert_eq!(simulator.ticks(), 1);
        // Firing re-armed exactly one new frame.
        assert_eq!(simulator.frames().requested.len(), 3);
    }

    #[test]
    fn frames_after_stop_do_not_tick_or_rearm() {
        let mut simulator = Simulator::builder().seed(1).build(RecordingFrames::default());
        simulator.load_data(&pair());
        let handle = simulator.frames().requested[0];

        simulator.stop();
        simulator.on_frame(handle);

        assert_eq!(simulator.ticks(), 0);
        assert_eq!(simulator.frames().requested.len(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut simulator = Simulator::builder().build(RecordingFrames::default());
        simulator.stop();
        simulator.stop();
        assert_eq!(simulator.state(), RunState::Stopped);
        assert!(simulator.frames().cancelled.is_empty());

        simulator.start();
        simulator.stop();
        simulator.stop();
        assert_eq!(simulator.state(), RunState::Stopped);
        assert_eq!(simulator.frames().cancelled.len(), 1);
    }

    #[test]
    fn restart_resets_the_tick_counter() {
        let mut simulator = Simulator::builder().seed(3).build(ManualFrames::default());
        simulator.load_data(&pair());
        assert_eq!(simulator.advance_by(5), 5);
        assert_eq!(simulator.ticks(), 5);

        simulator.start();
        assert_eq!(simulator.ticks(), 0);
        assert!(simulator.is_running());
    }

    #[test]
    fn advance_without_armed_frame_does_nothing() {
        let mut simulator = Simulator::builder().build(ManualFrames::default());
        assert!(!simulator.advance());
        assert_eq!(simulator.advance_by(10), 0);
    }

    #[test]
    fn events_apply_on_the_next_tick() {
        let mut simulator = Simulator::builder().build(ManualFrames::default());
        simulator.send(SimulatorEvent::RepelForceUpdated(10.0));
        simulator.send(SimulatorEvent::RepelForceUpdated(20.0));
        assert_eq!(simulator.config().repulsion, 5000.0);

        simulator.tick();
        assert_eq!(simulator.config().repulsion, 20.0);
    }

    #[test]
    fn set_config_replaces_every_coefficient() {
        let config = SimulationConfig {
            repulsion: 100.0,
            attraction: 0.5,
            damping: 0.5,
            center_gravity: 0.0,
        };
        let mut simulator = Simulator::builder().build(ManualFrames::default());
        simulator.set_config(config);
        assert_eq!(simulator.config(), SimulationConfig::default());

        simulator.tick();
        assert_eq!(simulator.config(), config);
    }

    #[test]
    fn builder_sets_coefficients() {
        let simulator = Simulator::builder()
            .repel_force(1.0)
            .spring_stiffness(2.0)
            .gravity_force(3.0)
            .damping(0.5)
            .build(ManualFrames::default());

        assert_eq!(
            simulator.config(),
            SimulationConfig {
                repulsion: 1.0,
                attraction: 2.0,
                damping: 0.5,
                center_gravity: 3.0,
            }
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"repulsion": 100.0}"#).unwrap();
        assert_eq!(config.repulsion, 100.0);
        assert_eq!(config.damping, 0.85);
    }

    #[test]
    fn seeded_layouts_are_reproducible() {
        let mut first = Simulator::builder().seed(42).build(ManualFrames::default());
        let mut second = Simulator::builder().seed(42).build(ManualFrames::default());
        first.load_data(&pair());
        second.load_data(&pair());
        first.advance_by(20);
        second.advance_by(20);

        assert_eq!(first.positions(), second.positions());
    }

    #[test]
    fn tick_steps_a_stopped_simulator() {
        let mut simulator = Simulator::builder().seed(1).build(RecordingFrames::default());
        simulator.load_data(&pair());
        simulator.stop();
        let before = simulator.node("a").unwrap().position;

        simulator.tick();

        assert_eq!(simulator.ticks(), 1);
        assert_eq!(simulator.state(), RunState::Stopped);
        assert_ne!(simulator.node("a").unwrap().position, before);
        // No frame was armed by the manual step.
        assert_eq!(simulator.frames().requested.len(), 1);
    }

    #[test]
    fn stats_serialize_in_camel_case() {
        let mut simulator = Simulator::builder().seed(1).build(ManualFrames::default());
        simulator.load_data(&pair());

        let json = serde_json::to_value(simulator.stats()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodeCount": 2,
                "edgeCount": 1,
                "kinds": {"Person": 1, "Place": 1},
            })
        );
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut simulator = Simulator::builder().seed(1).build(ManualFrames::default());
        simulator.load_data(&pair());
        simulator.drag_start("missing");
        simulator.drag_to("missing", Vec2::ZERO);
        simulator.drag_end("missing");

        assert!(simulator.node("missing").is_none());
        assert!(!simulator.node("a").unwrap().dragging);
    }
}

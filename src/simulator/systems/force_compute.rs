use crate::simulator::{
    components::{
        edges::Connects,
        nodes::{Hidden, NodeForces, Position},
    },
    many_body::ManyBodyForce,
    ressources::simulator_vars::{GravityForce, RepelForce, SpringStiffness, WorldSize},
};
use glam::Vec2;
use specs::{Entities, Entity, Join, Read, ReadStorage, System, WriteStorage};

/// Computes the repulsion between all visible nodes and resets every
/// visible node's force to it. Runs first among the force systems.
pub struct ComputeNodeForce {
    model: Box<dyn ManyBodyForce>,
    entities: Vec<Entity>,
    bodies: Vec<Vec2>,
    forces: Vec<Vec2>,
}

impl ComputeNodeForce {
    pub fn new(model: Box<dyn ManyBodyForce>) -> Self {
        Self {
            model,
            entities: Vec::new(),
            bodies: Vec::new(),
            forces: Vec::new(),
        }
    }
}

impl<'a> System<'a> for ComputeNodeForce {
    type SystemData = (
        Entities<'a>,
        ReadStorage<'a, Position>,
        ReadStorage<'a, Hidden>,
        WriteStorage<'a, NodeForces>,
        Read<'a, RepelForce>,
    );

    fn run(
        &mut self,
        (entities, positions, hidden, mut node_forces, repel_force): Self::SystemData,
    ) {
        self.entities.clear();
        self.bodies.clear();
        // Dragged nodes are sources too, so they are not filtered here.
        for (entity, position, _) in (&*entities, &positions, !&hidden).join() {
            self.entities.push(entity);
            self.bodies.push(position.0);
        }
        if self.bodies.is_empty() {
            return;
        }

        self.forces.clear();
        self.forces.resize(self.bodies.len(), Vec2::ZERO);
        self.model
            .accumulate(&self.bodies, repel_force.0, &mut self.forces);

        for (entity, force) in self.entities.iter().zip(&self.forces) {
            let _ = node_forces.insert(*entity, NodeForces(*force));
        }
    }
}

/// Pulls the endpoints of every visible edge towards each other,
/// proportionally to their distance.
pub struct ComputeEdgeForces;

impl<'a> System<'a> for ComputeEdgeForces {
    type SystemData = (
        ReadStorage<'a, Connects>,
        ReadStorage<'a, Hidden>,
        ReadStorage<'a, Position>,
        WriteStorage<'a, NodeForces>,
        Read<'a, SpringStiffness>,
    );

    fn run(
        &mut self,
        (connections, hidden, positions, mut forces, spring_stiffness): Self::SystemData,
    ) {
        for (connects, _) in (&connections, !&hidden).join() {
            let (Some(src), Some(target)) =
                (positions.get(connects.src), positions.get(connects.target))
            else {
                continue;
            };
            let spring_force = (target.0 - src.0) * spring_stiffness.0;

            if let Some(force) = forces.get_mut(connects.src) {
                force.0 += spring_force;
            }
            if let Some(force) = forces.get_mut(connects.target) {
                force.0 -= spring_force;
            }
        }
    }
}

/// Computes center gravity of the world.
/// All visible nodes gravitate towards the middle of the viewport.
pub struct ComputeGravityForce;

impl<'a> System<'a> for ComputeGravityForce {
    type SystemData = (
        ReadStorage<'a, Position>,
        ReadStorage<'a, Hidden>,
        WriteStorage<'a, NodeForces>,
        Read<'a, GravityForce>,
        Read<'a, WorldSize>,
    );

    fn run(
        &mut self,
        (positions, hidden, mut forces, gravity_force, world_size): Self::SystemData,
    ) {
        let center = world_size.center();
        for (position, force, _) in (&positions, &mut forces, !&hidden).join() {
            force.0 += (center - position.0) * gravity_force.0;
        }
    }
}

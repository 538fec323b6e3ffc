use crate::simulator::{
    components::nodes::{Dragged, Hidden, NodeForces, Position, Velocity},
    ressources::simulator_vars::Damping,
};
use glam::Vec2;
use specs::{Join, Read, ReadStorage, System, WriteStorage};

/// Integrates the forces of the current tick.
///
/// Free nodes: `v = (v + f) * damping`, then `p += v`.
/// Dragged nodes keep their position and have their velocity pinned to zero.
pub struct UpdateNodePosition;

impl<'a> System<'a> for UpdateNodePosition {
    type SystemData = (
        WriteStorage<'a, Position>,
        WriteStorage<'a, Velocity>,
        ReadStorage<'a, NodeForces>,
        ReadStorage<'a, Hidden>,
        ReadStorage<'a, Dragged>,
        Read<'a, Damping>,
    );

    fn run(
        &mut self,
        (mut positions, mut velocities, forces, hidden, dragged, damping): Self::SystemData,
    ) {
        for (position, velocity, force, _, _) in (
            &mut positions,
            &mut velocities,
            &forces,
            !&hidden,
            !&dragged,
        )
            .join()
        {
            velocity.0 = (velocity.0 + force.0) * damping.0;
            position.0 += velocity.0;
        }

        for (velocity, _, _) in (&mut velocities, &dragged, !&hidden).join() {
            velocity.0 = Vec2::ZERO;
        }
    }
}

use crate::simulator::ressources::{
    events::SimulatorEvent,
    simulator_vars::{Damping, GravityForce, RepelForce, SpringStiffness},
};
use log::debug;
use specs::shrev::EventChannel;
use specs::{Read, ReaderId, System, SystemData, World, Write};

/// Applies queued [`SimulatorEvent`]s before any force is computed.
#[derive(Default)]
pub struct EventManager {
    reader: Option<ReaderId<SimulatorEvent>>,
}

impl<'a> System<'a> for EventManager {
    type SystemData = (
        Read<'a, EventChannel<SimulatorEvent>>,
        Write<'a, RepelForce>,
        Write<'a, SpringStiffness>,
        Write<'a, GravityForce>,
        Write<'a, Damping>,
    );

    fn run(
        &mut self,
        (events, mut repel_force, mut spring_stiffness, mut gravity_force, mut damping): Self::SystemData,
    ) {
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        for event in events.read(reader) {
            debug!("Applying {event:?}");
            match *event {
                SimulatorEvent::RepelForceUpdated(value) => repel_force.0 = value,
                SimulatorEvent::SpringStiffnessUpdated(value) => spring_stiffness.0 = value,
                SimulatorEvent::GravityForceUpdated(value) => gravity_force.0 = value,
                SimulatorEvent::DampingUpdated(value) => damping.0 = value,
            }
        }
    }

    fn setup(&mut self, world: &mut World) {
        Self::SystemData::setup(world);
        self.reader = Some(
            world
                .fetch_mut::<EventChannel<SimulatorEvent>>()
                .register_reader(),
        );
    }
}

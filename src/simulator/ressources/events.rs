//! Events for tuning the simulator from the outside.

/// Describes an event received by the [`Simulator`](crate::simulator::Simulator).
///
/// Events are queued and applied at the start of the next tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimulatorEvent {
    /// Set the strength of the pairwise repulsion.
    RepelForceUpdated(f32),

    /// Set the linear pull applied along edges.
    SpringStiffnessUpdated(f32),

    /// Set the pull towards the viewport center.
    GravityForceUpdated(f32),

    /// Set the per-tick velocity decay.
    DampingUpdated(f32),
}

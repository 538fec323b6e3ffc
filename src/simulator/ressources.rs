//! Ressources shared by the simulator systems.

pub mod events;
pub mod simulator_vars;

//! The systems run by the simulator, in dispatch order:
//! event manager, node force, edge force, gravity force, position update.
//! The visibility system is run on demand.

pub mod event_manager;
pub mod force_compute;
pub mod position_update;
pub mod visibility;

//! The shared vocabulary of the simulation: seats, phases, forks and
//! snapshots. Pure data, no channels, no tasks.

pub mod fork;
pub mod phase;
pub mod seat;
pub mod snapshot;

pub use fork::*;
pub use phase::*;
pub use seat::*;
pub use snapshot::*;

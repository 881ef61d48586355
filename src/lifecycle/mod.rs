//! Wiring and teardown for the running system, plus observability setup.

pub mod table_system;
pub mod tracing;

pub use table_system::{SimConfig, TableSystem};
pub use tracing::setup_tracing;

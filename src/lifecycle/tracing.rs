//! # Observability & Tracing
//!
//! Structured logging for the whole binary, configured once at startup.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable; with the
//! variable unset nothing is logged, which keeps the terminal view clean.
//! The compact format hides the crate/module prefix (`with_target(false)`)
//! since the messages already carry the seat as a structured field.
//!
//! ## What gets traced
//!
//! - **Table lifecycle**: open, per-request handling, close (with the
//!   total meal count)
//! - **Fork protocol**: grants, parked requests, releases
//! - **Philosophers**: seating and leaving
//! - **Rejections**: precondition violations with seat ids
//!
//! ## Usage
//!
//! ```bash
//! # Lifecycle and grants
//! RUST_LOG=info cargo run -- 5
//!
//! # Every request, including per-second ticks
//! RUST_LOG=debug cargo run -- 5
//!
//! # Only the table actor
//! RUST_LOG=philosophers::table=debug cargo run -- 5
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Seat ids are structured fields; module paths just add noise
        .with_writer(std::io::stderr) // stdout belongs to the table view
        .compact()
        .init();
}

//! The table: sole owner of every seat and fork, and the only place where
//! philosophers coordinate.
//!
//! The table is an actor. [`TableActor`] holds the state and processes
//! [`TableRequest`] messages strictly one at a time; [`TableClient`] is the
//! cheap-to-clone async handle the philosophers and the observer talk
//! through. Nothing outside this module ever sees a fork directly.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::TableActor;
pub use client::TableClient;
pub use error::TableError;
pub use message::{Response, TableRequest};

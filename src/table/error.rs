//! Error types for the table actor.

use crate::model::SeatId;
use thiserror::Error;

/// Errors a table operation can report.
///
/// The first two are channel failures and only occur around shutdown. The
/// others are precondition violations: with callers constructed against a
/// fixed seat count they are never expected at runtime, and seeing one
/// means a caller bug, not a recoverable condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// The table actor is no longer receiving requests.
    #[error("Table closed")]
    ActorClosed,

    /// The table actor went away before replying.
    #[error("Table dropped response channel")]
    ActorDropped,

    /// The seat index is not at this table.
    #[error("No seat at this table for {0}")]
    UnknownSeat(SeatId),

    /// A seat tried to put forks back without holding any.
    #[error("{0} has no forks to put down")]
    NotEating(SeatId),
}

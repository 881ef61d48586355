//! Messages understood by the table actor.

use crate::model::{SeatId, TableSnapshot};
use crate::table::error::TableError;
use tokio::sync::oneshot;

/// One-shot reply channel for a table operation.
pub type Response<T> = oneshot::Sender<Result<T, TableError>>;

/// Requests sent from a [`TableClient`](crate::table::TableClient) to the
/// table actor.
///
/// Every operation on the table is one variant here. The actor handles one
/// variant at a time, which is what makes each operation atomic: no caller
/// can observe a fork pair half-claimed.
#[derive(Debug)]
pub enum TableRequest {
    /// Enter the Thinking phase for `duration` simulated seconds.
    BeginThinking {
        seat: SeatId,
        duration: u32,
        respond_to: Response<()>,
    },

    /// Advance the seat's current activity by one simulated second.
    /// Replies with the new elapsed value, clamped to the duration.
    Tick {
        seat: SeatId,
        respond_to: Response<u32>,
    },

    /// Go hungry and ask for both adjacent forks. The reply is **deferred**:
    /// it is sent only once the pair is simultaneously free, and the grant
    /// claims both forks in the same message step.
    RequestToEat {
        seat: SeatId,
        duration: u32,
        respond_to: Response<()>,
    },

    /// Put both forks back and return to Thinking. Frees the neighbors.
    FinishEating {
        seat: SeatId,
        respond_to: Response<()>,
    },

    /// A consistent copy of the whole table, for display or inspection.
    Snapshot {
        respond_to: Response<TableSnapshot>,
    },
}

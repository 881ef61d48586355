//! Async handle for talking to the table actor.

use crate::model::{SeatId, TableSnapshot};
use crate::table::error::TableError;
use crate::table::message::TableRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for the table actor.
///
/// Holds only the sender half of the actor's channel, so cloning is cheap;
/// every philosopher and the observer carry their own clone. Each method
/// is the request/response pair for one table operation: send the request
/// with a fresh oneshot, await the reply.
///
/// `request_to_eat` deserves a note: the future it returns does not
/// resolve until the actor grants the forks, which can be arbitrarily far
/// in the future. That pending await *is* the hungry philosopher's wait.
#[derive(Clone)]
pub struct TableClient {
    sender: mpsc::Sender<TableRequest>,
}

impl TableClient {
    pub(crate) fn new(sender: mpsc::Sender<TableRequest>) -> Self {
        Self { sender }
    }

    /// Start a Thinking phase of `duration` simulated seconds.
    pub async fn begin_thinking(&self, seat: SeatId, duration: u32) -> Result<(), TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::BeginThinking {
                seat,
                duration,
                respond_to,
            })
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }

    /// Advance the current activity by one simulated second. Returns the
    /// new elapsed value, clamped to the activity's duration.
    pub async fn tick(&self, seat: SeatId) -> Result<u32, TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Tick { seat, respond_to })
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }

    /// Go hungry; resolves once both adjacent forks have been claimed and
    /// the Eating phase (of `duration` simulated seconds) has begun.
    pub async fn request_to_eat(&self, seat: SeatId, duration: u32) -> Result<(), TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::RequestToEat {
                seat,
                duration,
                respond_to,
            })
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }

    /// Put both forks back and return to Thinking.
    pub async fn finish_eating(&self, seat: SeatId) -> Result<(), TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::FinishEating { seat, respond_to })
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }

    /// A consistent copy of the whole table.
    pub async fn snapshot(&self) -> Result<TableSnapshot, TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Snapshot { respond_to })
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }
}

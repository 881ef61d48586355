//! # The Table Actor
//!
//! This module defines the `TableActor`, the single owner of all seat and
//! fork state. It is the "server" side of the table: philosophers and the
//! observer only ever hold a [`TableClient`](crate::table::TableClient).

use crate::model::{ForkState, Phase, SeatId, TableSnapshot};
use crate::table::client::TableClient;
use crate::table::error::TableError;
use crate::table::message::{Response, TableRequest};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Per-seat bookkeeping.
struct Seat {
    phase: Phase,
    duration: u32,
    elapsed: u32,
    meals: u64,
}

impl Seat {
    fn new() -> Self {
        Self {
            phase: Phase::Thinking,
            duration: 0,
            elapsed: 0,
            meals: 0,
        }
    }
}

/// A hungry philosopher whose reply is parked until its forks are free.
struct PendingEater {
    seat: SeatId,
    duration: u32,
    respond_to: Response<()>,
}

/// The actor that owns the table.
///
/// # Architecture Note
/// This struct is the "Server" half of the table. It owns the state and
/// the receiver end of the channel.
///
/// **Concurrency model**:
/// The actor processes its messages *sequentially* in a loop, so there is
/// no `Mutex` around the seats or forks — exclusive ownership within the
/// task does the locking. Between any two messages, every invariant of
/// the table holds: each fork is free or held by exactly one seat, an
/// eating seat holds both of its forks, and two neighbors are never
/// eating at once.
///
/// **The waiting discipline**:
/// `RequestToEat` is the one operation whose reply can be deferred. When
/// the fork pair is not simultaneously free, the reply channel is parked
/// in `hungry`; every `FinishEating` re-checks all parked requests and
/// grants those whose pair has become free, both forks claimed in the
/// same message step. A philosopher therefore never holds exactly one of
/// its two forks, and the circular wait that deadlocks naive
/// fork-at-a-time tables cannot form. No grant order is promised beyond
/// "only requests whose forks are free": a seat can in principle be
/// outpaced by luckier neighbors indefinitely.
pub struct TableActor {
    receiver: mpsc::Receiver<TableRequest>,
    seats: Vec<Seat>,
    forks: Vec<ForkState>,
    hungry: Vec<PendingEater>,
}

impl TableActor {
    /// Creates a table with `seats` philosophers' places and as many forks,
    /// all free, plus the [`TableClient`](crate::table::TableClient) for it.
    ///
    /// # Arguments
    ///
    /// * `seats` - Places (and forks) around the table. Needs at least two
    ///   so that left and right forks are distinct.
    /// * `buffer_size` - Capacity of the request channel. Senders wait for
    ///   a slot when it is full.
    pub fn new(seats: usize, buffer_size: usize) -> (Self, TableClient) {
        debug_assert!(seats >= 2, "left and right fork must differ");
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            seats: (0..seats).map(|_| Seat::new()).collect(),
            forks: vec![ForkState::Free; seats],
            hungry: Vec::new(),
        };
        (actor, TableClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until the channel
    /// closes.
    ///
    /// Closing happens when every client clone has been dropped. Replies
    /// still parked in `hungry` at that point are dropped with the actor,
    /// which surfaces to the waiting callers as
    /// [`TableError::ActorDropped`].
    pub async fn run(mut self) {
        info!(seats = self.seats.len(), "Table open");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableRequest::BeginThinking {
                    seat,
                    duration,
                    respond_to,
                } => {
                    debug!(%seat, duration, "BeginThinking");
                    let result = self.begin_thinking(seat, duration);
                    if let Err(error) = &result {
                        warn!(%seat, %error, "BeginThinking rejected");
                    }
                    let _ = respond_to.send(result);
                }
                TableRequest::Tick { seat, respond_to } => {
                    let result = self.tick(seat);
                    match &result {
                        Ok(elapsed) => debug!(%seat, elapsed, "Tick"),
                        Err(error) => warn!(%seat, %error, "Tick rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                TableRequest::RequestToEat {
                    seat,
                    duration,
                    respond_to,
                } => {
                    debug!(%seat, duration, "RequestToEat");
                    self.request_to_eat(seat, duration, respond_to);
                }
                TableRequest::FinishEating { seat, respond_to } => {
                    debug!(%seat, "FinishEating");
                    let result = self.finish_eating(seat);
                    let released = result.is_ok();
                    if let Err(error) = &result {
                        warn!(%seat, %error, "FinishEating rejected");
                    }
                    let _ = respond_to.send(result);
                    if released {
                        self.wake_hungry();
                    }
                }
                TableRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
            }
        }

        let meals: u64 = self.seats.iter().map(|seat| seat.meals).sum();
        info!(meals, "Table closed");
    }

    fn check_seat(&self, seat: SeatId) -> Result<(), TableError> {
        if seat.0 < self.seats.len() {
            Ok(())
        } else {
            Err(TableError::UnknownSeat(seat))
        }
    }

    fn begin_thinking(&mut self, seat: SeatId, duration: u32) -> Result<(), TableError> {
        self.check_seat(seat)?;
        let state = &mut self.seats[seat.0];
        state.phase = Phase::Thinking;
        state.duration = duration;
        state.elapsed = 0;
        Ok(())
    }

    fn tick(&mut self, seat: SeatId) -> Result<u32, TableError> {
        self.check_seat(seat)?;
        let state = &mut self.seats[seat.0];
        // Callers pace ticks against real time; if one arrives late in a
        // phase the count clamps rather than running past the duration.
        state.elapsed = (state.elapsed + 1).min(state.duration);
        Ok(state.elapsed)
    }

    fn request_to_eat(&mut self, seat: SeatId, duration: u32, respond_to: Response<()>) {
        if let Err(error) = self.check_seat(seat) {
            warn!(%seat, %error, "RequestToEat rejected");
            let _ = respond_to.send(Err(error));
            return;
        }
        self.seats[seat.0].phase = Phase::Hungry;
        let request = PendingEater {
            seat,
            duration,
            respond_to,
        };
        if self.forks_free(seat) {
            self.grant(request);
        } else {
            debug!(%seat, parked = self.hungry.len() + 1, "Forks busy, waiting");
            self.hungry.push(request);
        }
    }

    fn finish_eating(&mut self, seat: SeatId) -> Result<(), TableError> {
        self.check_seat(seat)?;
        if self.seats[seat.0].phase != Phase::Eating {
            return Err(TableError::NotEating(seat));
        }
        let seats = self.forks.len();
        self.forks[seat.left_fork()] = ForkState::Free;
        self.forks[seat.right_fork(seats)] = ForkState::Free;
        self.seats[seat.0].phase = Phase::Thinking;
        Ok(())
    }

    /// True when both of the seat's forks are on the table.
    fn forks_free(&self, seat: SeatId) -> bool {
        let seats = self.forks.len();
        self.forks[seat.left_fork()].is_free() && self.forks[seat.right_fork(seats)].is_free()
    }

    /// Claims both forks for a hungry seat and sends the deferred reply.
    /// Caller must have checked `forks_free` in this same message step.
    fn grant(&mut self, request: PendingEater) {
        let PendingEater {
            seat,
            duration,
            respond_to,
        } = request;
        let seats = self.forks.len();
        self.forks[seat.left_fork()] = ForkState::HeldBy(seat);
        self.forks[seat.right_fork(seats)] = ForkState::HeldBy(seat);
        let state = &mut self.seats[seat.0];
        state.phase = Phase::Eating;
        state.duration = duration;
        state.elapsed = 0;
        state.meals += 1;
        info!(%seat, meal = state.meals, "Forks granted");
        let _ = respond_to.send(Ok(()));
    }

    /// Re-checks every parked request after a fork release and grants the
    /// ones whose pair is now free. A grant only takes forks *off* the
    /// table, so a single pass over the list suffices.
    fn wake_hungry(&mut self) {
        let mut i = 0;
        while i < self.hungry.len() {
            if self.forks_free(self.hungry[i].seat) {
                let request = self.hungry.remove(i);
                self.grant(request);
            } else {
                i += 1;
            }
        }
    }

    fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phases: self.seats.iter().map(|seat| seat.phase).collect(),
            forks: self.forks.clone(),
            durations: self.seats.iter().map(|seat| seat.duration).collect(),
            elapsed: self.seats.iter().map(|seat| seat.elapsed).collect(),
            meals: self.seats.iter().map(|seat| seat.meals).collect(),
        }
    }
}

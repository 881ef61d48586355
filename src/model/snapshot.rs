use crate::model::{ForkState, Phase, SeatId};
use serde::Serialize;

/// An internally consistent copy of the whole table at one instant.
///
/// Produced by the table actor between two message steps, so every
/// invariant of the live state holds in the copy as well. This is the only
/// read path into the table: the observer and the tests both consume it,
/// neither ever touches live state.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    /// Phase per seat.
    pub phases: Vec<Phase>,
    /// Availability per fork, indexed like the seats.
    pub forks: Vec<ForkState>,
    /// Length of the current activity per seat, in simulated seconds.
    pub durations: Vec<u32>,
    /// Progress within the current activity per seat. Never exceeds the
    /// matching duration.
    pub elapsed: Vec<u32>,
    /// Meals served per seat since the table opened.
    pub meals: Vec<u64>,
}

impl TableSnapshot {
    pub fn seats(&self) -> usize {
        self.phases.len()
    }

    pub fn left_fork(&self, seat: usize) -> ForkState {
        self.forks[SeatId(seat).left_fork()]
    }

    pub fn right_fork(&self, seat: usize) -> ForkState {
        self.forks[SeatId(seat).right_fork(self.seats())]
    }
}

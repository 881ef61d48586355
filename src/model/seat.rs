use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for a seat at the table.
///
/// Seats are numbered `0..N` around the table. Seat `i` shares fork `i`
/// with its left neighbor and fork `(i + 1) % N` with its right neighbor,
/// which is the whole reason the table needs a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub usize);

impl SeatId {
    /// Index of the fork on this seat's left.
    pub fn left_fork(self) -> usize {
        self.0
    }

    /// Index of the fork on this seat's right, wrapping around the table.
    pub fn right_fork(self, seats: usize) -> usize {
        (self.0 + 1) % seats
    }
}

impl Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "philosopher_{}", self.0)
    }
}

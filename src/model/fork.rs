use crate::model::SeatId;
use serde::{Deserialize, Serialize};

/// Availability of one fork.
///
/// A fork records *who* holds it, not just that it is taken; the eating
/// invariants ("a fork has at most one holder", "an eater holds both of
/// its own forks") are then checkable directly from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForkState {
    Free,
    HeldBy(SeatId),
}

impl ForkState {
    pub fn is_free(self) -> bool {
        matches!(self, ForkState::Free)
    }

    pub fn holder(self) -> Option<SeatId> {
        match self {
            ForkState::Free => None,
            ForkState::HeldBy(seat) => Some(seat),
        }
    }
}

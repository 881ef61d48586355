use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where a philosopher currently is in its cycle.
///
/// `Hungry` is the transient phase: the philosopher has asked for its
/// forks and is parked until both are simultaneously free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Thinking,
    Hungry,
    Eating,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Thinking => "THINKING",
            Phase::Hungry => "HUNGRY",
            Phase::Eating => "EATING",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() so the display column width applies
        f.pad(self.label())
    }
}

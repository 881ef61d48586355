//! The philosopher: think, go hungry, eat, repeat.
//!
//! Each philosopher runs in its own task and owns nothing but a seat
//! number, a [`TableClient`] and a private random generator. All
//! coordination with the neighbors goes through the table actor; two
//! philosopher tasks never talk to each other directly.

use crate::model::SeatId;
use crate::table::{TableClient, TableError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Simulated seconds spent thinking before going hungry.
pub const THINK_TICKS: RangeInclusive<u32> = 2..=5;

/// Simulated seconds a meal lasts once the forks are claimed.
pub const EAT_TICKS: RangeInclusive<u32> = 1..=3;

/// One seat's state machine driver.
pub struct Philosopher {
    seat: SeatId,
    table: TableClient,
    /// Real-time length of one simulated second.
    tick: Duration,
    /// Private generator, seeded from entropy; durations need no
    /// coordination, so no generator is ever shared between tasks.
    rng: StdRng,
}

impl Philosopher {
    pub fn new(seat: SeatId, table: TableClient, tick: Duration) -> Self {
        Self {
            seat,
            table,
            tick,
            rng: StdRng::from_entropy(),
        }
    }

    /// Runs the think/eat cycle forever.
    ///
    /// The cycle has no terminal state of its own; the loop ends only when
    /// a table call fails, which happens once the table actor has shut
    /// down.
    pub async fn run(mut self) {
        info!(seat = %self.seat, "Taking a seat");
        loop {
            if let Err(error) = self.next_course().await {
                debug!(seat = %self.seat, %error, "Leaving the table");
                break;
            }
        }
    }

    /// One full turn of the state machine:
    /// Thinking → Hungry → Eating → forks back.
    async fn next_course(&mut self) -> Result<(), TableError> {
        let thinking = self.rng.gen_range(THINK_TICKS);
        self.table.begin_thinking(self.seat, thinking).await?;
        self.pass_time(thinking).await?;

        let eating = self.rng.gen_range(EAT_TICKS);
        // Resolves only once both forks are in hand.
        self.table.request_to_eat(self.seat, eating).await?;
        self.pass_time(eating).await?;

        self.table.finish_eating(self.seat).await
    }

    /// Lets `ticks` simulated seconds pass, reporting each one to the
    /// table so observers see progress.
    async fn pass_time(&self, ticks: u32) -> Result<(), TableError> {
        for _ in 0..ticks {
            sleep(self.tick).await;
            self.table.tick(self.seat).await?;
        }
        Ok(())
    }
}

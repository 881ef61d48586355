use crate::model::SeatId;
use crate::philosopher::Philosopher;
use crate::table::{TableActor, TableClient};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Philosophers (and forks) around the table.
    pub seats: usize,
    /// Real-time length of one simulated second.
    pub tick: Duration,
}

impl SimConfig {
    pub fn new(seats: usize) -> Self {
        Self {
            seats,
            tick: Duration::from_secs(1),
        }
    }

    /// Shrinks the simulated second. The protocol is identical at any
    /// tick length; tests use this to run whole dinners in milliseconds.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}

/// The running simulation: one table actor plus one task per philosopher.
///
/// `TableSystem` is responsible for:
/// - **Lifecycle management**: spawning the table and every philosopher
/// - **Teardown**: [`shutdown`](TableSystem::shutdown) stops the
///   philosophers and drains the table
///
/// The public [`table`](TableSystem::table) client can be cloned freely
/// for read-only observers.
pub struct TableSystem {
    /// Client for the table actor.
    pub table: TableClient,
    table_handle: JoinHandle<()>,
    philosopher_handles: Vec<JoinHandle<()>>,
}

impl TableSystem {
    /// Seats everyone and serves dinner.
    pub fn new(config: SimConfig) -> Self {
        // One channel slot per diner plus one for an observer: nobody
        // queues more than a single request at a time.
        let (actor, table) = TableActor::new(config.seats, config.seats + 1);
        let table_handle = tokio::spawn(actor.run());

        let philosopher_handles = (0..config.seats)
            .map(|seat| {
                let philosopher = Philosopher::new(SeatId(seat), table.clone(), config.tick);
                tokio::spawn(philosopher.run())
            })
            .collect();

        info!(seats = config.seats, "Dinner is served");
        Self {
            table,
            table_handle,
            philosopher_handles,
        }
    }

    /// Stops every philosopher, then drains and closes the table actor.
    ///
    /// Philosopher loops have no terminal state of their own, so their
    /// tasks are cancelled at whatever point they are sleeping or
    /// waiting. Outside clones of [`table`](TableSystem::table) must be
    /// dropped before calling this, or the actor keeps serving them and
    /// the drain never completes.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Clearing the table...");

        for handle in &self.philosopher_handles {
            handle.abort();
        }
        for handle in self.philosopher_handles {
            // Cancelled tasks report a benign JoinError.
            let _ = handle.await;
        }

        // Last sender: dropping it lets the actor drain its queue and exit.
        drop(self.table);
        self.table_handle.await.map_err(|e| e.to_string())
    }
}

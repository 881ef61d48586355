//! # The Dining Philosophers
//!
//! > **A live terminal rendition of the classic table, built as a small
//! > message-passing actor system on Tokio.**
//!
//! N philosophers sit around a table with N forks, one between each pair
//! of neighbors. A philosopher thinks for a while, goes hungry, eats only
//! once both adjacent forks are in hand, and puts them back. The
//! interesting part is that nobody ever deadlocks and no fork is ever in
//! two hands.
//!
//! ## 🗺️ Module Tour
//!
//! - **[table]**: the heart of the system. A single
//!   [`TableActor`](table::TableActor) owns every seat and fork and
//!   processes requests strictly one at a time — sequential message
//!   handling is the lock. [`TableClient`](table::TableClient) is the
//!   cloneable async handle everyone else holds.
//! - **[philosopher]**: the per-seat state machine task
//!   (Thinking → Hungry → Eating, forever), paced by real time with a
//!   private random generator.
//! - **[observer]**: a read-only view that polls snapshots every 200 ms
//!   and repaints the terminal. It imposes nothing on the table.
//! - **[lifecycle]**: wiring and teardown
//!   ([`TableSystem`](lifecycle::TableSystem)) plus tracing setup.
//! - **[model]**: the shared vocabulary — [`SeatId`](model::SeatId),
//!   [`Phase`](model::Phase), [`ForkState`](model::ForkState),
//!   [`TableSnapshot`](model::TableSnapshot).
//!
//! ## 🔒 Why no deadlock?
//!
//! A philosopher never holds exactly one of its two forks. Fork pairs are
//! claimed atomically inside the actor: a request is either granted both
//! forks within a single message step or parked holding none, and every
//! release re-checks the parked requests. The circular wait that hangs
//! fork-at-a-time implementations cannot form. Fairness is another story:
//! no grant order is promised, and a philosopher with lucky neighbors can
//! wait a long time.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run -- 5                  # five philosophers
//! RUST_LOG=info cargo run -- 7    # with lifecycle logs on stderr
//! ```
//!
//! ## Driving the table by hand
//!
//! ```rust
//! use philosophers::model::{Phase, SeatId};
//! use philosophers::table::TableActor;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Create the table and its client
//!     let (actor, table) = TableActor::new(5, 8);
//!     tokio::spawn(actor.run());
//!
//!     // One philosopher through a full course, by hand
//!     table.begin_thinking(SeatId(0), 3).await.unwrap();
//!     table.tick(SeatId(0)).await.unwrap();
//!
//!     table.request_to_eat(SeatId(0), 2).await.unwrap();
//!     let snapshot = table.snapshot().await.unwrap();
//!     assert_eq!(snapshot.phases[0], Phase::Eating);
//!
//!     table.finish_eating(SeatId(0)).await.unwrap();
//! }
//! ```

pub mod lifecycle;
pub mod model;
pub mod observer;
pub mod philosopher;
pub mod table;

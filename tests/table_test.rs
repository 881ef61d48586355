//! Contract tests for the table actor: every operation, every safety
//! invariant, driven through the client exactly the way philosophers
//! drive it.

use philosophers::model::{ForkState, Phase, SeatId, TableSnapshot};
use philosophers::table::{TableActor, TableError};
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Checks every safety property a snapshot must satisfy.
fn assert_invariants(snapshot: &TableSnapshot) {
    let seats = snapshot.seats();
    for seat in 0..seats {
        assert!(
            snapshot.elapsed[seat] <= snapshot.durations[seat],
            "philosopher_{seat} ran past its duration"
        );
        if snapshot.phases[seat] == Phase::Eating {
            // An eater owns both adjacent forks...
            assert_eq!(snapshot.left_fork(seat), ForkState::HeldBy(SeatId(seat)));
            assert_eq!(snapshot.right_fork(seat), ForkState::HeldBy(SeatId(seat)));
            // ...so its neighbor cannot be eating at the same time.
            assert_ne!(snapshot.phases[(seat + 1) % seats], Phase::Eating);
        }
    }
    for (fork, state) in snapshot.forks.iter().enumerate() {
        if let Some(holder) = state.holder() {
            // A held fork belongs to an eater and is one of its two forks.
            assert_eq!(snapshot.phases[holder.0], Phase::Eating);
            assert!(
                fork == holder.left_fork() || fork == holder.right_fork(seats),
                "fork {fork} held by non-adjacent {holder}"
            );
        }
    }
}

#[tokio::test]
async fn new_table_is_idle() {
    let (actor, table) = TableActor::new(5, 8);
    tokio::spawn(actor.run());

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.seats(), 5);
    assert!(snapshot.phases.iter().all(|&p| p == Phase::Thinking));
    assert!(snapshot.forks.iter().all(|f| f.is_free()));
    assert!(snapshot.meals.iter().all(|&m| m == 0));
    assert_invariants(&snapshot);
}

#[tokio::test]
async fn single_philosopher_round_trip() {
    let (actor, table) = TableActor::new(5, 8);
    tokio::spawn(actor.run());
    let seat = SeatId(0);

    // Think for three simulated seconds.
    table.begin_thinking(seat, 3).await.unwrap();
    for expected in 1..=3 {
        assert_eq!(table.tick(seat).await.unwrap(), expected);
    }

    // Nobody is contending, so the forks come immediately.
    table.request_to_eat(seat, 2).await.unwrap();
    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phases[0], Phase::Eating);
    assert_eq!(snapshot.forks[0], ForkState::HeldBy(seat));
    assert_eq!(snapshot.forks[1], ForkState::HeldBy(seat));
    assert_eq!(snapshot.durations[0], 2);
    assert_eq!(snapshot.elapsed[0], 0);
    assert_eq!(snapshot.meals[0], 1);
    assert_invariants(&snapshot);

    table.tick(seat).await.unwrap();
    table.tick(seat).await.unwrap();
    table.finish_eating(seat).await.unwrap();

    // Both forks are back on the table, exactly as before the meal.
    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phases[0], Phase::Thinking);
    assert!(snapshot.forks.iter().all(|f| f.is_free()));
    assert_invariants(&snapshot);
}

#[tokio::test]
async fn tick_clamps_at_duration() {
    let (actor, table) = TableActor::new(5, 8);
    tokio::spawn(actor.run());
    let seat = SeatId(0);

    table.begin_thinking(seat, 2).await.unwrap();
    assert_eq!(table.tick(seat).await.unwrap(), 1);
    assert_eq!(table.tick(seat).await.unwrap(), 2);
    // Extra ticks clamp instead of running past the duration.
    assert_eq!(table.tick(seat).await.unwrap(), 2);
    assert_eq!(table.tick(seat).await.unwrap(), 2);

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.elapsed[0], 2);
    assert_invariants(&snapshot);

    // Later transitions are unaffected by the overrun.
    table.request_to_eat(seat, 1).await.unwrap();
    table.tick(seat).await.unwrap();
    table.finish_eating(seat).await.unwrap();
    let snapshot = table.snapshot().await.unwrap();
    assert!(snapshot.forks.iter().all(|f| f.is_free()));
}

#[tokio::test]
async fn adjacent_rivals_take_turns() {
    let (actor, table) = TableActor::new(5, 8);
    tokio::spawn(actor.run());

    // Seat 0 eats first, holding forks 0 and 1.
    table.request_to_eat(SeatId(0), 2).await.unwrap();

    // Seat 1 needs fork 1 and must wait.
    let rival = table.clone();
    let waiting = tokio::spawn(async move { rival.request_to_eat(SeatId(1), 1).await });
    sleep(Duration::from_millis(50)).await;

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phases[0], Phase::Eating);
    assert_eq!(snapshot.phases[1], Phase::Hungry);
    assert!(!waiting.is_finished(), "rival ate with a fork in use");
    assert_invariants(&snapshot);

    // The moment seat 0 finishes, the parked request is granted.
    table.finish_eating(SeatId(0)).await.unwrap();
    timeout(Duration::from_secs(1), waiting)
        .await
        .expect("parked request never granted")
        .unwrap()
        .unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phases[0], Phase::Thinking);
    assert_eq!(snapshot.phases[1], Phase::Eating);
    assert_eq!(snapshot.meals[1], 1);
    assert_invariants(&snapshot);
}

#[tokio::test]
async fn distant_seats_eat_together() {
    let (actor, table) = TableActor::new(5, 8);
    tokio::spawn(actor.run());

    // Seats 0 and 2 share no fork and both get served at once.
    table.request_to_eat(SeatId(0), 2).await.unwrap();
    table.request_to_eat(SeatId(2), 2).await.unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phases[0], Phase::Eating);
    assert_eq!(snapshot.phases[2], Phase::Eating);
    assert_invariants(&snapshot);

    // Seat 1 sits between them and needs both of their forks.
    let squeezed = table.clone();
    let waiting = tokio::spawn(async move { squeezed.request_to_eat(SeatId(1), 1).await });
    sleep(Duration::from_millis(50)).await;
    assert!(!waiting.is_finished());

    // One neighbor finishing is not enough...
    table.finish_eating(SeatId(0)).await.unwrap();
    sleep(Duration::from_millis(50)).await;
    assert!(!waiting.is_finished(), "ate while fork 2 was in use");

    // ...both is.
    table.finish_eating(SeatId(2)).await.unwrap();
    timeout(Duration::from_secs(1), waiting)
        .await
        .expect("parked request never granted")
        .unwrap()
        .unwrap();

    let snapshot = table.snapshot().await.unwrap();
    assert_eq!(snapshot.phases[1], Phase::Eating);
    assert_invariants(&snapshot);
}

#[tokio::test]
async fn unknown_seat_is_rejected() {
    let (actor, table) = TableActor::new(5, 8);
    tokio::spawn(actor.run());

    let stranger = SeatId(7);
    assert_eq!(
        table.tick(stranger).await,
        Err(TableError::UnknownSeat(stranger))
    );
    assert_eq!(
        table.begin_thinking(stranger, 3).await,
        Err(TableError::UnknownSeat(stranger))
    );
    assert_eq!(
        table.request_to_eat(stranger, 1).await,
        Err(TableError::UnknownSeat(stranger))
    );
}

#[tokio::test]
async fn finishing_without_a_meal_is_rejected() {
    let (actor, table) = TableActor::new(5, 8);
    tokio::spawn(actor.run());

    assert_eq!(
        table.finish_eating(SeatId(0)).await,
        Err(TableError::NotEating(SeatId(0)))
    );

    // The rejection corrupted nothing.
    let snapshot = table.snapshot().await.unwrap();
    assert!(snapshot.forks.iter().all(|f| f.is_free()));
    assert_invariants(&snapshot);
}

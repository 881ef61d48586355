//! Formatting tests for the observer's display rows.

use philosophers::model::{ForkState, Phase, SeatId, TableSnapshot};
use philosophers::observer::{seat_line, BAR_WIDTH};

fn quiet_table() -> TableSnapshot {
    TableSnapshot {
        phases: vec![Phase::Thinking; 5],
        forks: vec![ForkState::Free; 5],
        durations: vec![0; 5],
        elapsed: vec![0; 5],
        meals: vec![0; 5],
    }
}

fn bar_cells(line: &str) -> usize {
    line.chars().filter(|&c| c == '#').count()
}

#[test]
fn bar_tracks_progress() {
    let mut snapshot = quiet_table();
    snapshot.durations[0] = 4;
    snapshot.elapsed[0] = 2;

    let line = seat_line(&snapshot, 0);
    assert_eq!(bar_cells(&line), BAR_WIDTH / 2);
    assert!(line.contains("THINKING"));
}

#[test]
fn bar_is_empty_before_any_activity() {
    // durations start at zero; the bar must not divide by it
    let line = seat_line(&quiet_table(), 0);
    assert_eq!(bar_cells(&line), 0);
}

#[test]
fn bar_saturates_at_full_width() {
    let mut snapshot = quiet_table();
    snapshot.durations[2] = 3;
    snapshot.elapsed[2] = 3;

    assert_eq!(bar_cells(&seat_line(&snapshot, 2)), BAR_WIDTH);
}

#[test]
fn fork_flags_follow_the_holder() {
    let mut snapshot = quiet_table();
    snapshot.phases[0] = Phase::Eating;
    snapshot.forks[0] = ForkState::HeldBy(SeatId(0));
    snapshot.forks[1] = ForkState::HeldBy(SeatId(0));

    // The eater sees both forks in hand.
    assert!(seat_line(&snapshot, 0).contains("L:X R:X"));
    // Its right neighbor has lost only its left fork.
    assert!(seat_line(&snapshot, 1).contains("L:X R:O"));
    // The left neighbor has lost only its right fork.
    assert!(seat_line(&snapshot, 4).contains("L:O R:X"));
    // Across the table nothing changed.
    assert!(seat_line(&snapshot, 2).contains("L:O R:O"));
}

#[test]
fn meals_are_reported_per_seat() {
    let mut snapshot = quiet_table();
    snapshot.meals[3] = 12;

    assert!(seat_line(&snapshot, 3).ends_with("meals 12"));
    assert!(seat_line(&snapshot, 0).ends_with("meals 0"));
}

//! Read-only terminal view of the table.
//!
//! The observer polls a [`TableSnapshot`] on a fixed cadence and repaints
//! the whole frame: alternate screen, hidden cursor, absolute cursor
//! positioning. It never mutates table state and never blocks anyone for
//! longer than one snapshot copy.

use crate::model::TableSnapshot;
use crate::table::TableClient;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::debug;

/// Cells in a philosopher's progress bar.
pub const BAR_WIDTH: usize = 20;

/// How often the table is repainted.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(200);

/// The rendering task.
pub struct Observer {
    table: TableClient,
    refresh: Duration,
}

impl Observer {
    pub fn new(table: TableClient) -> Self {
        Self {
            table,
            refresh: REFRESH_INTERVAL,
        }
    }

    pub fn with_refresh(mut self, refresh: Duration) -> Self {
        self.refresh = refresh;
        self
    }

    /// Paints frames until the table shuts down or the terminal fails.
    pub async fn run(self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        let mut frames = tokio::time::interval(self.refresh);
        let result = loop {
            frames.tick().await;
            let snapshot = match self.table.snapshot().await {
                Ok(snapshot) => snapshot,
                Err(error) => {
                    debug!(%error, "Table gone, closing the view");
                    break Ok(());
                }
            };
            if let Err(error) = draw(&mut stdout, &snapshot) {
                break Err(error);
            }
        };

        restore_terminal()?;
        result
    }
}

/// Puts the terminal back into its normal state.
///
/// Safe to call more than once; `main` calls it again after cancelling the
/// observer task, which may have been stopped mid-frame.
pub fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)
}

fn draw(stdout: &mut Stdout, snapshot: &TableSnapshot) -> io::Result<()> {
    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("The dining philosophers")
    )?;
    for seat in 0..snapshot.seats() {
        queue!(
            stdout,
            MoveTo(0, (2 + seat) as u16),
            Print(seat_line(snapshot, seat))
        )?;
    }
    stdout.flush()
}

/// One display row: seat, phase, fork availability, progress bar, meals.
///
/// `O` marks a fork lying on the table, `X` one that is in somebody's
/// hand. The bar shows progress through the current activity and
/// saturates at full width.
pub fn seat_line(snapshot: &TableSnapshot, seat: usize) -> String {
    let left = if snapshot.left_fork(seat).is_free() { 'O' } else { 'X' };
    let right = if snapshot.right_fork(seat).is_free() { 'O' } else { 'X' };
    let filled = bar_fill(snapshot.elapsed[seat], snapshot.durations[seat]);
    let bar: String = (0..BAR_WIDTH)
        .map(|cell| if cell < filled { '#' } else { ' ' })
        .collect();
    format!(
        "philosopher_{:<3} | {:<8} | L:{} R:{} | [{}] meals {}",
        seat, snapshot.phases[seat], left, right, bar, snapshot.meals[seat]
    )
}

fn bar_fill(elapsed: u32, duration: u32) -> usize {
    if duration == 0 {
        return 0;
    }
    (elapsed as usize * BAR_WIDTH / duration as usize).min(BAR_WIDTH)
}

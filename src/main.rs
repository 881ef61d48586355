//! Process bootstrap: argument validation, wiring, teardown.

use clap::error::ErrorKind;
use clap::Parser;
use philosophers::lifecycle::{setup_tracing, SimConfig, TableSystem};
use philosophers::observer::{restore_terminal, Observer};
use tracing::info;

/// Smallest table the classic problem is stated for.
const MIN_SEATS: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "philosophers", about = "The dining philosophers, live in your terminal")]
struct Cli {
    /// Number of philosophers at the table (at least 5).
    seats: usize,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Contract for bad invocations: report on stderr and exit with
    // status 1 before anything is spawned. clap's default exit code
    // differs, hence try_parse.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        eprintln!("{err}");
        std::process::exit(1);
    });
    if cli.seats < MIN_SEATS {
        eprintln!("the table needs at least {MIN_SEATS} philosophers");
        std::process::exit(1);
    }

    setup_tracing();

    let system = TableSystem::new(SimConfig::new(cli.seats));
    let view = tokio::spawn(Observer::new(system.table.clone()).run());

    // Dinner never ends on its own; run until the process is told to stop.
    tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?;
    info!("Interrupted, closing up");

    // The view task may be cancelled mid-frame, so restore the terminal
    // here as well (restore_terminal is idempotent).
    view.abort();
    let _ = view.await;
    restore_terminal().map_err(|e| e.to_string())?;

    system.shutdown().await
}

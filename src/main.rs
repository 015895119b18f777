//! Tetris Stack runner (default binary).
//!
//! Pre-fills the upcoming-piece queue and then drives the text menu over
//! stdin/stdout. Diagnostics go to stderr, filtered by `RUST_LOG`.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use tetris_stack::core::StackGame;
use tetris_stack::term::ConsoleRenderer;
use tetris_stack::Session;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let stdout = io::stdout();
    let color = stdout.is_tty();

    let mut game = StackGame::new(clock_seed());
    let renderer = ConsoleRenderer::new(stdout, color);
    let mut session = Session::new(&mut game, io::stdin().lock(), renderer);
    session.run()
}

/// Wall-clock seed; 1 if the clock reads before the epoch.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

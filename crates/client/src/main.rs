//! Arena bot binary.
//!
//! Reads the game from stdin and answers on stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! RUST_LOG=arena_runtime=debug BOT_TRACE_FILE=trace.jsonl cargo run -p arena-client < game.txt
//! ```

use std::io;

use anyhow::{Context, Result};
use arena_client::{BotConfig, Session, setup_logging};
use arena_runtime::TraceWriter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = BotConfig::from_env();

    // 2. Setup logging; the guard flushes the file log on exit
    let _guard = setup_logging(&config)?;

    tracing::info!("Starting arena bot");

    // 3. Play on the process streams
    let session = Session::new(io::stdin().lock(), io::stdout().lock());
    let turns = match &config.trace_file {
        Some(path) => session
            .with_trace(TraceWriter::create(path).context("opening decision trace")?)
            .play(),
        None => session.play(),
    }
    .context("game session failed")?;

    tracing::info!("Bot shutdown after {} turns", turns);
    Ok(())
}

//! Food-chain simulation client binary.
//!
//! Loads a content directory, builds the runtime, and resolves a fixed number
//! of turns headlessly, printing a summary (and optionally the board) after
//! each one.
//!
//! # Environment
//!
//! - `FOODCHAIN_CONTENT_DIR`: content directory (default: bundled `content/`)
//! - `FOODCHAIN_TURNS`: number of turns to resolve
//! - `FOODCHAIN_SEED`: game seed, overriding `config.toml`
//! - `FOODCHAIN_TRANSITION_POLICY`: `wait` or `settle`
//! - `FOODCHAIN_LOG_DIR`: log to a daily file instead of stderr
//! - `FOODCHAIN_JSON_REPORTS`, `FOODCHAIN_RENDER_BOARD`: output toggles
//!
//! ```bash
//! FOODCHAIN_TURNS=50 FOODCHAIN_TRANSITION_POLICY=settle cargo run -p foodchain-client
//! ```

mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use game_core::EntityKind;
use runtime::{Event, MoveEvent, Runtime, Topic};

use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting food-chain client");
    tracing::info!("Content: {}", config.content_dir.display());
    tracing::info!("Transition policy: {}", config.transition_policy);

    let mut content = ContentFactory::new(&config.content_dir)
        .load_all()
        .with_context(|| format!("loading content from {}", config.content_dir.display()))?;

    let seed = config
        .game_seed
        .or(content.config.game_seed)
        .unwrap_or_else(rand::random);
    content.config.game_seed = Some(seed);
    tracing::info!("Game seed: {}", seed);

    let species = content.species.clone();
    let runtime = Runtime::builder()
        .content(content)
        .transition_policy(config.transition_policy)
        .build()
        .await?;
    let handle = runtime.handle();

    let mut moves = handle.subscribe(Topic::Movement);
    let move_logger = tokio::spawn(async move {
        while let Ok(event) = moves.recv().await {
            if let Event::Move(MoveEvent::Stale { ticket }) = event {
                tracing::debug!(%ticket, "Stale transition");
            } else {
                tracing::trace!(?event, "Move event");
            }
        }
    });

    if config.render_board {
        println!("{}", render::render_board(&handle.query_state().await?, &species));
    }

    for _ in 0..config.turns {
        let report = match runtime.step().await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Stopping: {}", e);
                break;
            }
        };

        if config.json_reports {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", render::summarize(&report));
        }
        if config.render_board {
            println!("{}", render::render_board(&handle.query_state().await?, &species));
        }
    }

    let state = handle.query_state().await?;
    tracing::info!(
        turns = state.turn.turn,
        predators = state.entities.count_of(EntityKind::Predator),
        prey = state.entities.count_of(EntityKind::Prey),
        plants = state.entities.count_of(EntityKind::Plant),
        pending = state.turn.pending.len(),
        "Simulation finished"
    );

    drop(handle);
    runtime.shutdown().await?;
    move_logger.abort();

    tracing::info!("Client shutdown complete");
    Ok(())
}

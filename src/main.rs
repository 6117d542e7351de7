//! Terminal Pong runner (default binary).
//!
//! The terminal is the full-screen window: mouse motion steers the paddle,
//! clicks drive the Game Over prompts, `q`/`Esc`/`Ctrl-C` quit at any time.
//! Input is read on its own thread; the simulation, rendering and blitting
//! run on the main thread at a fixed tick rate.

use std::fs::OpenOptions;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use tui_pong::core::Paddle;
use tui_pong::engine::{FixedRateDriver, GameConfig, GameLoop};
use tui_pong::input::{spawn_event_reader, SharedPointer};
use tui_pong::term::TerminalRenderer;
use tui_pong::types::{Arena, CellScale};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let scale = config.scale();
    let mut term = TerminalRenderer::new();
    let (cols, rows) = term.size();
    let arena = scale.arena_for(cols, rows);
    if !arena.is_playable() {
        bail!(
            "terminal too small: {}x{} cells gives a {}x{} px arena",
            cols,
            rows,
            arena.width,
            arena.height
        );
    }

    term.enter()?;
    let result = run(&mut term, arena, scale, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("game loop failed: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, arena: Arena, scale: CellScale, config: &GameConfig) -> Result<()> {
    let pointer = Arc::new(SharedPointer::new(Paddle::centered(arena).x));
    let (tx, rx) = mpsc::channel();
    // The input thread blocks on terminal reads; it is left behind at exit.
    spawn_event_reader(Arc::clone(&pointer), arena, scale, tx).context("spawn input thread")?;

    let mut game = GameLoop::new(arena, scale, term, pointer, rx);
    let mut driver = FixedRateDriver::new(config.tick_period());
    game.run(&mut driver)?;
    log::info!("exiting after {} rounds", game.state().episode_id() + 1);
    Ok(())
}

/// Logs go to `PONG_LOG_PATH` when set; stderr belongs to the terminal UI.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path))?;
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    log::info!("tui-pong starting, {} Hz", config.tick_hz);
    Ok(())
}

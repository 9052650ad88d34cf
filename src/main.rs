//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! Moves go through the session's queue, so rapid key presses are applied one
//! cooldown apart instead of all at once.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_2048::core::rng::{self, GameRng};
use tui_2048::core::{GameConfig, Session};
use tui_2048::input::{handle_key_event, should_quit, InputCommand};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, TileAnimator, Viewport};
use tui_2048::types::{DEFAULT_DIMENSION, DEFAULT_THRESHOLD, QUEUE_DELAY_MS, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Slide and merge tiles in the terminal")]
struct Args {
    /// Board side length.
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,
    /// Tile value that wins the game.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,
    /// Seed for tile placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Cooldown between queued moves, in milliseconds.
    #[arg(long, default_value_t = QUEUE_DELAY_MS)]
    delay_ms: u32,
    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Tracing filter, e.g. "info", "tui_2048_core=debug".
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        // The terminal belongs to the game; logs go to a file.
        let log_file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log))
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    }

    let config = GameConfig::new(args.dimension, args.threshold)
        .context("invalid game settings")?
        .with_queue_delay_ms(args.delay_ms);
    let rng = match args.seed {
        Some(seed) => rng::seeded(seed),
        None => rng::from_entropy(),
    };
    info!(seed = ?args.seed, "starting tui-2048");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, rng);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig, rng: GameRng) -> Result<()> {
    let mut session: Session<TileAnimator, GameRng> =
        Session::new(config, TileAnimator::new(), rng);
    session.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.game(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = session.game().score(), "quit");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputCommand::Move(direction)) => {
                            if let Err(err) = session.request_move_and_follow_up(direction) {
                                warn!(%err, "move ignored");
                            }
                        }
                        Some(InputCommand::Restart) => {
                            session.request_reset();
                            session.start();
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
            session.game_mut().observer_mut().advance(TICK_MS);
        }
    }
}

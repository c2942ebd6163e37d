//! Terminal block-puzzle runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_blocks::term`. Gravity runs off wall-clock time; the loop wakes at
//! least once per frame to redraw.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_blocks::core::{GameSnapshot, GameState};
use tui_blocks::input::{handle_key_event, should_quit};
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::FRAME_MS;

#[derive(Parser, Debug)]
#[command(name = "tui-blocks")]
#[command(about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

/// Route tracing output to `path`. The terminal itself is owned by the game.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = game.apply_action(action);
                        debug!(action = action.as_str(), applied, "key action");
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed_ms = last_tick.elapsed().as_millis() as u32;
        if elapsed_ms > 0 {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            game.tick(elapsed_ms);
        }
    }
}

//! Terminal 2048 runner (default binary).
//!
//! Reads keys and mouse swipes with crossterm, feeds them to a `Game`
//! session, and redraws the grid through the framebuffer renderer.
//! Set `RUST_LOG=debug` and redirect stderr to see engine logs.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_2048::config::{CliArgs, GameConfig};
use tui_2048::core::{Game, GridSnapshot};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::term::{FrameBuffer, GridView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let config = GameConfig::load(args.config.as_deref())?;
    let seed = config.resolve_seed();
    info!(
        "starting {}x{} grid, {} initial cells, seed {}",
        config.grid_size, config.grid_size, config.initial_cells, seed
    );

    // Validate before touching the terminal so errors print normally.
    let mut game = Game::new(config.grid(), seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(message) = game.status().message(game.score()) {
        println!("{}", message);
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GridView::default();
    let mut swipe = SwipeTracker::default();
    let mut snap = GridSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse_event(mouse).map(GameAction::Move),
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            if let Err(err) = game.apply_action(action) {
                warn!("{} failed: {}", action.as_str(), err);
                return Err(err.into());
            }
        }
    }
}

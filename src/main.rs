//! SummaX terminal runner (default binary).
//!
//! Parses the command line, pipes logs into a file, then runs the game loop:
//! draw a frame, block on the next terminal event, apply it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use summax::core::{GameConfig, GameState};
use summax::input::{handle_key_event, should_quit};
use summax::term::{FrameBuffer, GameView, GlyphMode, TerminalRenderer, Viewport};
use summax::types::{DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Parser, Debug)]
#[command(name = "summax", version, about = "Select rectangles of digits that sum to ten")]
struct Cli {
    /// Board height
    #[arg(long, env = "SUMMAX_ROWS", default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Board width
    #[arg(long, env = "SUMMAX_COLS", default_value_t = DEFAULT_COLS)]
    cols: u16,

    /// Board seed; 0 or absent seeds from the clock
    #[arg(long, env = "SUMMAX_SEED")]
    seed: Option<u64>,

    /// Draw digits as braille dot patterns
    #[arg(long, env = "SUMMAX_BRAILLE")]
    braille: bool,

    /// Show cursor coordinates and the selection mask under the board
    #[arg(long, env = "SUMMAX_DEBUG_PANEL")]
    debug_panel: bool,

    #[arg(long, env = "SUMMAX_LOG_FILE", default_value = "summax.log")]
    log_file: PathBuf,

    /// env_logger filter, e.g. `info` or `summax_core=debug`
    #[arg(long, env = "SUMMAX_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            seed: self.seed,
        }
    }

    fn view(&self) -> GameView {
        let glyphs = if self.braille {
            GlyphMode::Braille
        } else {
            GlyphMode::Digits
        };
        GameView::new(glyphs).with_debug_panel(self.debug_panel)
    }
}

fn init_logging(path: &Path, filters: &str) -> Result<()> {
    // The alternate screen owns stdout, so logs go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .parse_filters(filters)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file, &cli.log_level)?;

    // Fail on a bad board before touching the terminal.
    let game = GameState::new(&cli.game_config())?;
    log::info!(
        "starting {}x{} game, seed {}",
        game.rows(),
        game.cols(),
        game.seed()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &cli.view());

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::error!("failed to restore terminal: {err:#}");
    }
    if let Err(err) = &result {
        log::error!("game loop ended with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, view: &GameView) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    log::info!("quit with score {}", game.score());
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    log::trace!("{action:?}");
                    game.apply_action(action);
                }
            }
            Event::Resize(w, h) => {
                log::debug!("terminal resized to {w}x{h}");
                term.invalidate();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_flags_build_the_config() {
        let cli = Cli::try_parse_from([
            "summax", "--rows", "4", "--cols", "5", "--seed", "42", "--braille",
        ])
        .unwrap();

        let config = cli.game_config();
        assert_eq!((config.rows, config.cols, config.seed), (4, 5, Some(42)));
        assert!(cli.braille);
        assert!(!cli.debug_panel);
    }
}

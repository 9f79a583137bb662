// Terminal Sokoban on top of the sokoban_rules engine.
// Controls: W/A/S/D or arrow keys to move, R to restart, N for the next level, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

mod console_interface;
mod models;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use crate::models::{GameRenderState, StatusObserver};
use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_rules::{Game, GameObserver, JsonLevelFile, LevelError, LevelSource, SokobanGame};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sokoban")]
#[command(about = "Push every box onto a target", long_about = None)]
struct Args {
    /// Path to the levels file (JSON)
    #[arg(value_name = "LEVELS", default_value = "levels/levels.json")]
    levels_file: PathBuf,

    /// Level id to start on
    #[arg(short, long, default_value = "1")]
    level: i32,

    /// Last level id reachable with the next-level key
    #[arg(long)]
    last_level: Option<i32>,

    /// File receiving the log output (the terminal is taken by the game)
    #[arg(long, default_value = "sokoban.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&args.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(log_out))
        .init();

    let mut game = Game::new(JsonLevelFile::new(&args.levels_file));
    info!(
        levels_file = %game.source().path().display(),
        level = args.level,
        last_level = ?args.last_level,
        "sokoban starting"
    );

    let status = Rc::new(StatusObserver::new());
    let handle: Rc<dyn GameObserver> = status.clone();
    game.add_observer(&handle);

    // fail before touching the terminal so the error stays readable
    game.load_level(args.level)?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut game, &status, args.last_level, &mut terminal);
    cleanup_terminal()?;

    game.remove_observer(&handle);
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    info!("sokoban exiting");
    result
}

fn run_interactive<S: LevelSource>(
    game: &mut Game<S>,
    status: &StatusObserver,
    last_level: Option<i32>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(terminal, &GameRenderState::capture(&*game, status, None))?;

    loop {
        let mut error = None;
        match handle_input()? {
            Quit => break,
            Move(direction) => game.move_player(direction),
            Restart => {
                if let Err(err) = game.restart_level() {
                    error = Some(err.to_string());
                }
            }
            NextLevel => {
                if let Err(err) = load_next_level(game, status, last_level) {
                    error = Some(err.to_string());
                }
            }
            Timeout | Unknown => continue,
        }
        render_game(terminal, &GameRenderState::capture(&*game, status, error))?;
    }

    Ok(())
}

const ALL_LEVELS_DONE: &str = "You've completed all levels! Congratulations!";

/// Advances to the following level id. When there is none only the status
/// line changes and the current board is left as it is.
fn load_next_level<S: LevelSource>(
    game: &mut Game<S>,
    status: &StatusObserver,
    last_level: Option<i32>,
) -> Result<(), LevelError> {
    let Some(current) = game.current_level_id() else {
        return Ok(());
    };
    let next = match current.checked_add(1) {
        Some(next) if last_level.is_none_or(|last| next <= last) => next,
        _ => {
            status.set_message(ALL_LEVELS_DONE);
            return Ok(());
        }
    };

    // a failed engine load leaves the loading state, so probe the source first
    match game.source().load(next) {
        Ok(_) => {}
        Err(LevelError::NotFound(_)) => {
            info!(level_id = next, "no further levels");
            status.set_message(ALL_LEVELS_DONE);
            return Ok(());
        }
        Err(err) => return Err(err),
    }

    if let Err(err) = game.load_level(next) {
        game.restart_level()?;
        return Err(err);
    }
    Ok(())
}

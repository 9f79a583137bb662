use std::cell::RefCell;

use sokoban_rules::{GameEvent, GameObserver, GameState, SokobanGame, render_game_to_string};

/// Status line kept up to date by engine notifications.
pub struct StatusObserver {
    message: RefCell<String>,
}

impl StatusObserver {
    pub fn new() -> StatusObserver {
        StatusObserver {
            message: RefCell::new(String::from("Use arrow keys to move. R to restart.")),
        }
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    pub fn set_message(&self, message: impl Into<String>) {
        *self.message.borrow_mut() = message.into();
    }
}

impl GameObserver for StatusObserver {
    fn on_notify(&self, event: GameEvent) {
        match event {
            GameEvent::LevelReloaded => self.set_message("Level loaded! Use arrow keys to move."),
            GameEvent::LevelWon => {
                self.set_message("Level complete! Press N for the next level or R to restart.")
            }
            GameEvent::PlayerMoved | GameEvent::BoxMoved => {}
        }
    }
}

/// Everything one frame needs, read from the engine's query surface.
pub struct GameRenderState {
    pub board: String,
    pub level_id: Option<i32>,
    pub moves: u32,
    pub won: bool,
    pub status: String,
    pub error: Option<String>,
}

impl GameRenderState {
    pub fn capture<G: SokobanGame + ?Sized>(
        game: &G,
        status: &StatusObserver,
        error: Option<String>,
    ) -> GameRenderState {
        GameRenderState {
            board: render_game_to_string(game),
            level_id: game.current_level_id(),
            moves: game.move_count(),
            won: game.current_state() == GameState::LevelCompleted,
            status: status.message(),
            error,
        }
    }
}

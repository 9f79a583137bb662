use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::core::entity::{GameObject, Player, PushBox};
use crate::core::error::{LevelError, OutOfBounds};
use crate::core::level::Level;
use crate::core::loader::LevelSource;
use crate::core::models::{Direction, GameEvent, GameState, Position, TileKind};
use crate::core::observer::{GameObserver, ObserverList};
use crate::core::update::{MoveResolution, resolve_move};

/// What a front end needs from the rule engine: commands, observer
/// registration and a read-only view of the board.
pub trait SokobanGame {
    fn load_level(&mut self, level_id: i32) -> Result<(), LevelError>;
    fn move_player(&mut self, direction: Direction);
    fn restart_level(&mut self) -> Result<(), LevelError>;

    fn add_observer(&mut self, observer: &Rc<dyn GameObserver>);
    fn remove_observer(&mut self, observer: &Rc<dyn GameObserver>);

    fn current_state(&self) -> GameState;
    fn current_level_id(&self) -> Option<i32>;
    fn level_width(&self) -> i32;
    fn level_height(&self) -> i32;
    fn tile_at(&self, position: Position) -> Result<TileKind, OutOfBounds>;
    fn player_position(&self) -> Position;
    /// Snapshot of every box cell, in box order.
    fn box_positions(&self) -> Vec<Position>;
    fn move_count(&self) -> u32;
}

/// The rule engine. Owns the loaded level, the player and the boxes, and
/// notifies observers synchronously before each command returns.
///
/// Commands take `&mut self`, so an observer cannot call back into the
/// engine while it is being notified.
#[derive(Debug)]
pub struct Game<S> {
    source: S,
    observers: ObserverList,
    level: Level,
    player: Player,
    boxes: Vec<PushBox>,
    move_count: u32,
    state: GameState,
    current_level_id: Option<i32>,
}

impl<S: LevelSource> Game<S> {
    pub fn new(source: S) -> Game<S> {
        Game {
            source,
            observers: ObserverList::new(),
            level: Level::default(),
            player: Player::default(),
            boxes: Vec::new(),
            move_count: 0,
            state: GameState::Loading,
            current_level_id: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Every box sits on a target. Holds trivially when there are no boxes.
    pub fn check_win_condition(&self) -> bool {
        self.boxes
            .iter()
            .all(|b| self.level.tile_at(b.position()) == Ok(TileKind::Target))
    }

    pub fn notify(&self, event: GameEvent) {
        debug!(?event, "notify");
        self.observers.notify(event);
    }
}

impl<S: LevelSource> SokobanGame for Game<S> {
    fn load_level(&mut self, level_id: i32) -> Result<(), LevelError> {
        self.state = GameState::Loading;

        let level = self.source.load(level_id).inspect_err(|err| {
            warn!(level_id, error = %err, "failed to load level");
        })?;

        self.player = Player::new(level.player_start());
        self.boxes = level.box_positions().into_iter().map(PushBox::new).collect();
        self.level = level;
        self.move_count = 0;
        self.current_level_id = Some(level_id);
        self.state = GameState::Playing;

        info!(
            level_id,
            width = self.level.width(),
            height = self.level.height(),
            boxes = self.boxes.len(),
            "level loaded"
        );
        self.notify(GameEvent::LevelReloaded);
        Ok(())
    }

    fn move_player(&mut self, direction: Direction) {
        if self.state != GameState::Playing {
            debug!(?direction, state = ?self.state, "move ignored");
            return;
        }

        match resolve_move(&self.level, self.player.position(), &self.boxes, direction) {
            MoveResolution::Blocked(reason) => {
                debug!(?direction, ?reason, "move blocked");
                return;
            }
            MoveResolution::Walk { to } => {
                self.player.set_position(to);
            }
            MoveResolution::Push {
                to,
                box_index,
                box_to,
            } => {
                self.boxes[box_index].set_position(box_to);
                self.notify(GameEvent::BoxMoved);
                self.player.set_position(to);
            }
        }

        self.move_count += 1;
        self.notify(GameEvent::PlayerMoved);

        if self.check_win_condition() {
            self.state = GameState::LevelCompleted;
            info!(
                level_id = ?self.current_level_id,
                moves = self.move_count,
                "level completed"
            );
            self.notify(GameEvent::LevelWon);
        }
    }

    fn restart_level(&mut self) -> Result<(), LevelError> {
        let Some(level_id) = self.current_level_id else {
            debug!("restart ignored, no level loaded");
            return Ok(());
        };
        info!(level_id, "restarting level");
        self.load_level(level_id)
    }

    fn add_observer(&mut self, observer: &Rc<dyn GameObserver>) {
        self.observers.add(observer);
    }

    fn remove_observer(&mut self, observer: &Rc<dyn GameObserver>) {
        self.observers.remove(observer);
    }

    fn current_state(&self) -> GameState {
        self.state
    }

    fn current_level_id(&self) -> Option<i32> {
        self.current_level_id
    }

    fn level_width(&self) -> i32 {
        self.level.width()
    }

    fn level_height(&self) -> i32 {
        self.level.height()
    }

    fn tile_at(&self, position: Position) -> Result<TileKind, OutOfBounds> {
        self.level.tile_at(position)
    }

    fn player_position(&self) -> Position {
        self.player.position()
    }

    fn box_positions(&self) -> Vec<Position> {
        self.boxes.iter().map(|b| b.position()).collect()
    }

    fn move_count(&self) -> u32 {
        self.move_count
    }
}

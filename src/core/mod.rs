mod ascii;
mod bounded_grid;
mod bounds;
mod entity;
mod error;
mod game;
mod level;
mod loader;
mod models;
mod observer;
mod update;

pub use ascii::{parse_ascii_level, render_game_to_string};
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use entity::{GameObject, Player, PushBox};
pub use error::{LevelError, OutOfBounds};
pub use game::{Game, SokobanGame};
pub use level::Level;
pub use loader::{JsonLevelFile, LevelCatalog, LevelFile, LevelRecord, LevelSource, PositionRecord};
pub use models::{Direction, GameEvent, GameState, Position, TileKind};
pub use observer::{GameObserver, ObserverList};
pub use update::{BlockReason, MoveResolution, resolve_move};

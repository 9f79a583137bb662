use crate::core::bounded_grid::BoundedGrid;
use crate::core::error::OutOfBounds;
use crate::core::models::{Position, TileKind};

/// Static terrain of one level plus the starting placement of the player and boxes.
///
/// A fresh `Level` is built on every load. The default value is the empty
/// 0x0 level the engine holds before anything has been loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Level {
    tiles: BoundedGrid<TileKind>,
    player_start: Position,
    box_positions: Vec<Position>,
}

impl Level {
    pub(crate) fn new(
        tiles: BoundedGrid<TileKind>,
        player_start: Position,
        box_positions: Vec<Position>,
    ) -> Level {
        Level {
            tiles,
            player_start,
            box_positions,
        }
    }

    pub fn width(&self) -> i32 {
        self.tiles.size().width
    }

    pub fn height(&self) -> i32 {
        self.tiles.size().height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.tiles.contains(position)
    }

    pub fn tile_at(&self, position: Position) -> Result<TileKind, OutOfBounds> {
        self.tiles.get(position).copied().ok_or(OutOfBounds {
            position,
            width: self.width(),
            height: self.height(),
        })
    }

    /// Inside the grid and not a wall.
    pub fn is_walkable(&self, position: Position) -> bool {
        matches!(self.tiles.get(position), Some(tile) if *tile != TileKind::Wall)
    }

    pub fn player_start(&self) -> Position {
        self.player_start
    }

    /// Initial box cells in load order. Returns a copy.
    pub fn box_positions(&self) -> Vec<Position> {
        self.box_positions.clone()
    }
}

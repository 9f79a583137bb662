//! Error types for level loading and grid queries.
//!
//! Movement and observer registration never fail; only loading a level and
//! querying a tile can.

use std::path::PathBuf;

use crate::core::models::Position;

/// Errors raised while turning a level source into a [`Level`](crate::core::Level).
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The level file could not be opened or read.
    #[error("level source {} could not be read", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The level source was read but does not hold valid level data.
    #[error("level source {origin} is not valid level data")]
    SourceCorrupt {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// No record in the source carries the requested id.
    #[error("level {0} not found")]
    NotFound(i32),

    /// A grid cell holds an integer that maps to no tile kind.
    #[error("level {level_id} has unknown tile code {code} at {position}")]
    InvalidTileCode {
        level_id: i32,
        position: Position,
        code: i64,
    },

    /// The grid does not match its declared width and height.
    #[error("level {level_id} has inconsistent dimensions: {detail}")]
    DimensionMismatch { level_id: i32, detail: String },

    /// The player start or a box lies outside the grid.
    #[error("level {level_id} places the {entity} at {position}, outside the grid")]
    PositionOutOfBounds {
        level_id: i32,
        entity: &'static str,
        position: Position,
    },
}

impl LevelError {
    /// True for failures of the source as a whole rather than of one level.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            LevelError::SourceUnavailable { .. } | LevelError::SourceCorrupt { .. }
        )
    }
}

/// A tile query outside `[0, height) x [0, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {position} is outside the {height}x{width} grid")]
pub struct OutOfBounds {
    pub position: Position,
    pub width: i32,
    pub height: i32,
}

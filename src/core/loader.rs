//! Level sources. A source maps a numeric level id to a freshly built [`Level`].
//!
//! Level files are JSON documents of the form
//! `{ "levels": [ { "id", "width", "height", "grid", "playerStart", "boxPositions" } ] }`
//! where `grid` is row-major integer tile codes (0 path, 1 wall, 2 target).

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::error::LevelError;
use crate::core::level::Level;
use crate::core::models::{Position, TileKind};

pub trait LevelSource {
    fn load(&self, level_id: i32) -> Result<Level, LevelError>;
}

impl<S: LevelSource + ?Sized> LevelSource for Box<S> {
    fn load(&self, level_id: i32) -> Result<Level, LevelError> {
        (**self).load(level_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelFile {
    pub levels: Vec<LevelRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    pub id: i32,
    pub width: i32,
    pub height: i32,
    pub grid: Vec<Vec<i64>>,
    pub player_start: PositionRecord,
    #[serde(default)]
    pub box_positions: Vec<PositionRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRecord {
    pub row: i32,
    pub col: i32,
}

impl From<PositionRecord> for Position {
    fn from(record: PositionRecord) -> Position {
        Position::new(record.row, record.col)
    }
}

impl From<Position> for PositionRecord {
    fn from(position: Position) -> PositionRecord {
        PositionRecord {
            row: position.row(),
            col: position.col(),
        }
    }
}

impl LevelFile {
    /// First record with a matching id, in file order.
    pub fn find(&self, level_id: i32) -> Result<&LevelRecord, LevelError> {
        let mut matches = self.levels.iter().filter(|record| record.id == level_id);
        let first = matches.next().ok_or(LevelError::NotFound(level_id))?;
        let duplicates = matches.count();
        if duplicates > 0 {
            warn!(level_id, duplicates, "duplicate level id, using the first record");
        }
        Ok(first)
    }
}

impl LevelRecord {
    /// Validates the record and builds the level it describes.
    pub fn to_level(&self) -> Result<Level, LevelError> {
        let level_id = self.id;
        if self.width < 0 || self.height < 0 {
            return Err(LevelError::DimensionMismatch {
                level_id,
                detail: format!("negative size {}x{}", self.height, self.width),
            });
        }
        if self.grid.len() != self.height as usize {
            return Err(LevelError::DimensionMismatch {
                level_id,
                detail: format!("declares {} rows but grid has {}", self.height, self.grid.len()),
            });
        }

        // rows are checked before the grid is sized from the declared extent
        if let Some((row, codes)) = self
            .grid
            .iter()
            .enumerate()
            .find(|(_, codes)| codes.len() != self.width as usize)
        {
            return Err(LevelError::DimensionMismatch {
                level_id,
                detail: format!(
                    "declares {} columns but row {} has {}",
                    self.width,
                    row,
                    codes.len()
                ),
            });
        }

        let mut tiles = BoundedGrid::new(BoundsOriginRoot::new(self.height, self.width));
        for (row, codes) in self.grid.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                let position = Position::new(row as i32, col as i32);
                let tile = TileKind::from_code(code).ok_or(LevelError::InvalidTileCode {
                    level_id,
                    position,
                    code,
                })?;
                tiles.set(position, tile);
            }
        }

        let player_start = Position::from(self.player_start);
        if !tiles.contains(player_start) {
            return Err(LevelError::PositionOutOfBounds {
                level_id,
                entity: "player start",
                position: player_start,
            });
        }

        let mut box_positions = Vec::with_capacity(self.box_positions.len());
        for &record in &self.box_positions {
            let position = Position::from(record);
            if !tiles.contains(position) {
                return Err(LevelError::PositionOutOfBounds {
                    level_id,
                    entity: "box",
                    position,
                });
            }
            box_positions.push(position);
        }

        Ok(Level::new(tiles, player_start, box_positions))
    }
}

/// Level records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct LevelCatalog {
    file: LevelFile,
}

impl LevelCatalog {
    pub fn from_records(levels: Vec<LevelRecord>) -> LevelCatalog {
        LevelCatalog {
            file: LevelFile { levels },
        }
    }

    pub fn from_json_str(json: &str) -> Result<LevelCatalog, LevelError> {
        let file = serde_json::from_str(json).map_err(|source| LevelError::SourceCorrupt {
            origin: "<string>".to_string(),
            source,
        })?;
        Ok(LevelCatalog { file })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<LevelCatalog, LevelError> {
        let file = serde_json::from_reader(reader).map_err(|source| LevelError::SourceCorrupt {
            origin: "<reader>".to_string(),
            source,
        })?;
        Ok(LevelCatalog { file })
    }

    pub fn records(&self) -> &[LevelRecord] {
        &self.file.levels
    }
}

impl LevelSource for LevelCatalog {
    fn load(&self, level_id: i32) -> Result<Level, LevelError> {
        self.file.find(level_id)?.to_level()
    }
}

/// A JSON level file on disk. The file is read again on every load.
#[derive(Debug, Clone)]
pub struct JsonLevelFile {
    path: PathBuf,
}

impl JsonLevelFile {
    pub fn new(path: impl Into<PathBuf>) -> JsonLevelFile {
        JsonLevelFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<LevelFile, LevelError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| {
            LevelError::SourceUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;
        serde_json::from_str(&text).map_err(|source| LevelError::SourceCorrupt {
            origin: self.path.display().to_string(),
            source,
        })
    }
}

impl LevelSource for JsonLevelFile {
    fn load(&self, level_id: i32) -> Result<Level, LevelError> {
        debug!(path = %self.path.display(), level_id, "reading level file");
        let file = self.read()?;
        file.find(level_id)?.to_level()
    }
}

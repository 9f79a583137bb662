//! The classic text notation for boards:
//! `#` wall, ` ` floor, `.` target, `$` box, `*` box on target,
//! `@` player, `+` player on target.

use crate::core::game::SokobanGame;
use crate::core::loader::{LevelRecord, PositionRecord};
use crate::core::models::{Position, TileKind};

/// Builds a level record from text. Blank lines are skipped, short rows are
/// padded with floor, and unknown characters read as floor.
pub fn parse_ascii_level(id: i32, s: &str) -> LevelRecord {
    let lines: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end_matches(['\n', '\r']))
        .filter(|line| !line.is_empty())
        .collect();
    let max_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut grid: Vec<Vec<i64>> = Vec::with_capacity(lines.len());
    let mut player = PositionRecord { row: 0, col: 0 };
    let mut boxes: Vec<PositionRecord> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(max_width);
        for (j, ch) in line.chars().enumerate() {
            let here = PositionRecord {
                row: i as i32,
                col: j as i32,
            };
            let tile = match ch {
                '#' => TileKind::Wall,
                '.' => TileKind::Target,
                '$' => {
                    boxes.push(here);
                    TileKind::Path
                }
                '*' => {
                    boxes.push(here);
                    TileKind::Target
                }
                '@' => {
                    player = here;
                    TileKind::Path
                }
                '+' => {
                    player = here;
                    TileKind::Target
                }
                _ => TileKind::Path,
            };
            row.push(tile.code());
        }
        row.resize(max_width, TileKind::Path.code());
        grid.push(row);
    }

    LevelRecord {
        id,
        width: max_width as i32,
        height: grid.len() as i32,
        grid,
        player_start: player,
        box_positions: boxes,
    }
}

/// Draws the current board of any game using the query surface only.
pub fn render_game_to_string<G: SokobanGame + ?Sized>(game: &G) -> String {
    let player = game.player_position();
    let boxes = game.box_positions();

    let mut result = String::new();
    for i in 0..game.level_height() {
        for j in 0..game.level_width() {
            let pos = Position::new(i, j);
            let Ok(tile) = game.tile_at(pos) else {
                continue;
            };
            let has_player = pos == player;
            let has_box = boxes.contains(&pos);
            let ch = match tile {
                TileKind::Wall => '#',
                TileKind::Path if has_player => '@',
                TileKind::Path if has_box => '$',
                TileKind::Path => ' ',
                TileKind::Target if has_player => '+',
                TileKind::Target if has_box => '*',
                TileKind::Target => '.',
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

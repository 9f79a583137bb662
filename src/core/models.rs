/// A cell coordinate on the level grid. Rows grow downwards, columns grow to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn set_row(&mut self, row: i32) {
        self.row = row;
    }

    pub fn set_col(&mut self, col: i32) {
        self.col = col;
    }

    /// The neighbouring cell one step in `direction`.
    pub fn offset(self, direction: Direction) -> Position {
        let (d_row, d_col) = direction.delta();
        Position {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    #[default]
    Path,
    Wall,
    Target,
}

impl TileKind {
    /// Maps the integer code used by level files. 0 is path, 1 wall, 2 target.
    pub fn from_code(code: i64) -> Option<TileKind> {
        match code {
            0 => Some(TileKind::Path),
            1 => Some(TileKind::Wall),
            2 => Some(TileKind::Target),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            TileKind::Path => 0,
            TileKind::Wall => 1,
            TileKind::Target => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, col)` step for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Lifecycle of the rule engine. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Loading,
    Playing,
    LevelCompleted,
}

/// Emitted to observers whenever the engine state changes. Carries no payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEvent {
    LevelReloaded,
    PlayerMoved,
    BoxMoved,
    LevelWon,
}

use crate::core::models::Position;

/// A grid extent with one corner fixed at row 0, column 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub height: i32,
    pub width: i32,
}

impl BoundsOriginRoot {
    pub fn new(height: i32, width: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { height, width }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row() >= 0 && pos.row() < self.height && pos.col() >= 0 && pos.col() < self.width
    }

    /// Cell count, zero for a negative extent.
    pub fn area(&self) -> usize {
        let width = usize::try_from(self.width).unwrap_or(0);
        let height = usize::try_from(self.height).unwrap_or(0);
        width.saturating_mul(height)
    }
}

use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Position;

/// Row-major cell storage with a fixed extent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot) -> Self
    where
        T: Clone + Default,
    {
        let cells = vec![T::default(); bounds.area()];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self.cells[self.index_of(pos)])
    }

    pub fn set(&mut self, pos: Position, value: T) -> bool {
        if !self.bounds.contains(pos) {
            return false;
        }
        let index = self.index_of(pos);
        self.cells[index] = value;
        true
    }

    fn index_of(&self, pos: Position) -> usize {
        (pos.row() * self.bounds.width + pos.col()) as usize
    }
}

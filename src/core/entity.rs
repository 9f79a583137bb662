use crate::core::models::Position;

/// Anything that occupies a single cell on the board.
pub trait GameObject {
    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position);
}

macro_rules! game_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            position: Position,
        }

        impl $name {
            pub fn new(position: Position) -> $name {
                $name { position }
            }
        }

        impl GameObject for $name {
            fn position(&self) -> Position {
                self.position
            }

            fn set_position(&mut self, position: Position) {
                self.position = position;
            }
        }
    };
}

game_object!(Player);
game_object!(
    /// A pushable box. Boxes have no id; they are found by their current cell.
    PushBox
);

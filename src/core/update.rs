use crate::core::entity::{GameObject, PushBox};
use crate::core::level::Level;
use crate::core::models::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockReason {
    PlayerOutOfBounds,
    PlayerIntoWall,
    BoxOutOfBounds,
    BoxIntoWall,
    BoxIntoBox,
}

/// Outcome of a single move attempt, before anything is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveResolution {
    Blocked(BlockReason),
    Walk {
        to: Position,
    },
    Push {
        to: Position,
        box_index: usize,
        box_to: Position,
    },
}

/// Resolves one step of the player in `direction`, pushing at most one box.
pub fn resolve_move(
    level: &Level,
    player: Position,
    boxes: &[PushBox],
    direction: Direction,
) -> MoveResolution {
    let next = player.offset(direction);
    if !level.contains(next) {
        return MoveResolution::Blocked(BlockReason::PlayerOutOfBounds);
    }
    if !level.is_walkable(next) {
        return MoveResolution::Blocked(BlockReason::PlayerIntoWall);
    }

    let Some(box_index) = index_of_box_at(boxes, next) else {
        return MoveResolution::Walk { to: next };
    };

    let box_to = next.offset(direction);
    if !level.contains(box_to) {
        return MoveResolution::Blocked(BlockReason::BoxOutOfBounds);
    }
    if !level.is_walkable(box_to) {
        return MoveResolution::Blocked(BlockReason::BoxIntoWall);
    }
    if index_of_box_at(boxes, box_to).is_some() {
        return MoveResolution::Blocked(BlockReason::BoxIntoBox);
    }

    MoveResolution::Push {
        to: next,
        box_index,
        box_to,
    }
}

fn index_of_box_at(boxes: &[PushBox], position: Position) -> Option<usize> {
    boxes.iter().position(|b| b.position() == position)
}

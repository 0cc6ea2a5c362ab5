use smallvec::SmallVec;

use crate::constants::MOVE_OFFSETS;

use super::{Board, Position};

/// A knight has at most eight destinations, so these never spill to the heap.
pub type Neighbors = SmallVec<[Position; 8]>;

/// Unoccupied knight destinations from `pos`, in `MOVE_OFFSETS` order.
pub fn neighbors(board: &Board, pos: Position) -> Neighbors {
    MOVE_OFFSETS
        .iter()
        .filter_map(|&delta| pos.offset(delta))
        .filter(|&next| !board.is_occupied(next))
        .collect()
}

pub fn count_moves(board: &Board, pos: Position) -> usize {
    MOVE_OFFSETS
        .iter()
        .filter_map(|&delta| pos.offset(delta))
        .filter(|&next| !board.is_occupied(next))
        .count()
}

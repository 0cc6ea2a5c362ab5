use std::fmt::{Display, Error, Formatter};

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use display::ColoredBoard;
pub use moves::{count_moves, neighbors, Neighbors};

pub mod board;
pub(crate) mod display;
pub mod moves;


/// A square on the board, zero indexed from the top left.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
    /// Applies a `(row, col)` delta, `None` if either coordinate would go negative.
    /// The upper edge is the board's business, see [`Board::is_occupied`].
    pub fn offset(self, (dr, dc): (isize, isize)) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        return Some(Position { row, col });
    }
    pub fn min_coordinate(self) -> usize { self.row.min(self.col) }
    pub fn is_knight_move(self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        return (dr == 1 && dc == 2) || (dr == 2 && dc == 1);
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "({}, {})", self.row, self.col)
    }
}

use std::collections::VecDeque;

use crate::game::{neighbors, Position};

use super::KnightTour;

impl KnightTour {
    /// Layered expansion that claims every square the moment it is queued.
    ///
    /// Claimed squares are never released, so a layer that strands the rest of
    /// the board ends the search. This is a greedy single pass, not a complete
    /// search over paths.
    pub(crate) fn breadth_first(&mut self, start: Position) -> bool {
        let goal = self.board.cell_count() - 1;
        let mut frontier = VecDeque::new();
        frontier.push_back((start, 0usize));
        while let Some((position, depth)) = frontier.pop_front() {
            if self.budget.exceeded() {
                return false;
            }
            self.expand();
            if depth == goal {
                return true;
            }
            for next in neighbors(&self.board, position) {
                self.board.mark(next, depth as i32 + 1);
                frontier.push_back((next, depth + 1));
            }
            coz::progress!("frontier pop");
        }
        return false;
    }
}

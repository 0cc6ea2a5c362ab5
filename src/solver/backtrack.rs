use crate::game::{Neighbors, Position};

use super::{Heuristic, KnightTour};

/// One level of the descent: the square the knight stands on and the
/// destinations from it that are still untried.
#[derive(Clone, Debug)]
struct Frame {
    position: Position,
    step: i32,
    candidates: Neighbors,
    cursor: usize,
}

impl Frame {
    fn next_candidate(&mut self) -> Option<Position> {
        let next = self.candidates.get(self.cursor).copied();
        self.cursor += 1;
        return next;
    }
}

enum Entry {
    Expired,
    Goal,
    Expanded(Frame),
}

impl KnightTour {
    /// Entering a node: time check, then goal check, then one expansion.
    /// `step` counts the squares already placed.
    fn enter(&mut self, position: Position, step: i32, heuristic: Heuristic) -> Entry {
        if self.budget.exceeded() {
            return Entry::Expired;
        }
        if step as usize == self.board.cell_count() {
            return Entry::Goal;
        }
        self.expand();
        return Entry::Expanded(Frame {
            position,
            step,
            candidates: heuristic.order(&self.board, position),
            cursor: 0,
        });
    }

    /// Depth first backtracking over an explicit frame stack.
    ///
    /// Each destination is marked before its node is entered and unmarked when
    /// that node fails, whether it ran out of moves or out of time. On failure
    /// the board is back to holding only the start.
    pub(crate) fn backtrack(&mut self, start: Position, heuristic: Heuristic) -> bool {
        let mut stack = match self.enter(start, 1, heuristic) {
            Entry::Expired => return false,
            Entry::Goal => return true,
            Entry::Expanded(frame) => vec![frame],
        };
        while let Some(frame) = stack.last_mut() {
            match frame.next_candidate() {
                Some(next) => {
                    let step = frame.step;
                    self.board.mark(next, step);
                    match self.enter(next, step + 1, heuristic) {
                        Entry::Goal => return true,
                        Entry::Expired => self.board.unmark(next),
                        Entry::Expanded(child) => stack.push(child),
                    }
                }
                None => {
                    let exhausted = stack.pop().map(|frame| frame.position);
                    // the start square belongs to the session, not to a parent frame
                    if let (Some(position), false) = (exhausted, stack.is_empty()) {
                        self.board.unmark(position);
                    }
                    coz::progress!("backtrack");
                }
            }
        }
        return false;
    }
}

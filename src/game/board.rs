use serde::{Deserialize, Serialize};

use crate::constants::*;

use super::Position;

/// Visitation order of every square, `UNVISITED` until the knight lands there.
#[derive(Eq, PartialEq, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<i32>,
}

impl Board {
    pub fn new(size: usize) -> Board {
        Board {
            size,
            cells: vec![UNVISITED; size * size],
        }
    }
    pub fn size(&self) -> usize { self.size }
    pub fn cell_count(&self) -> usize { self.cells.len() }
    pub fn contains(&self, pos: Position) -> bool { pos.row < self.size && pos.col < self.size }
    fn index(&self, pos: Position) -> usize { pos.row * self.size + pos.col }

    /// The step the knight reached `pos` on, `None` off the board or when unvisited.
    pub fn get(&self, pos: Position) -> Option<i32> {
        if !self.contains(pos) {
            return None;
        }
        let step = self.cells[self.index(pos)];
        return (step != UNVISITED).then_some(step);
    }
    /// Out of bounds counts as occupied, so move generation needs no separate bounds test.
    pub fn is_occupied(&self, pos: Position) -> bool {
        !self.contains(pos) || self.cells[self.index(pos)] != UNVISITED
    }
    pub(crate) fn mark(&mut self, pos: Position, step: i32) {
        debug_assert!(!self.is_occupied(pos), "marking occupied square {}", pos);
        let index = self.index(pos);
        self.cells[index] = step;
    }
    pub(crate) fn unmark(&mut self, pos: Position) {
        debug_assert!(self.contains(pos), "unmarking square {} off the board", pos);
        let index = self.index(pos);
        self.cells[index] = UNVISITED;
    }
    pub fn visited(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != UNVISITED).count()
    }
    /// Highest step on the board, the knight's current square after a depth first search.
    pub fn last_step(&self) -> Option<i32> {
        self.cells.iter().copied().filter(|&cell| cell != UNVISITED).max()
    }
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks(0) panics, an empty board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
    /// Visited squares ordered by the step they were reached on.
    pub fn path(&self) -> Vec<Position> {
        let mut steps: Vec<(i32, Position)> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != UNVISITED)
            .map(|(i, &cell)| (cell, Position::new(i / self.size, i % self.size)))
            .collect();
        steps.sort_unstable();
        return steps.into_iter().map(|(_, pos)| pos).collect();
    }
    /// Every step 0..n² appears exactly once and each follows the previous by a knight move.
    pub fn is_complete_tour(&self) -> bool {
        let mut seen = vec![None; self.cells.len()];
        for (i, &cell) in self.cells.iter().enumerate() {
            let Ok(step) = usize::try_from(cell) else { return false };
            match seen.get_mut(step) {
                Some(slot) if slot.is_none() => *slot = Some(Position::new(i / self.size, i % self.size)),
                _ => return false,
            }
        }
        let path: Option<Vec<Position>> = seen.into_iter().collect();
        return match path {
            Some(path) => path.windows(2).all(|w| w[0].is_knight_move(w[1])),
            None => false,
        };
    }
}

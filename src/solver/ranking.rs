use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::game::{count_moves, neighbors, Board, Neighbors, Position};

/// Move ordering policy, picked once per search.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Generator order, nothing is scored.
    None,
    /// Warnsdorff: fewest onward moves first.
    Degree,
    /// Degree minus `min(row, col)`. The subtraction grows away from the
    /// top and left edges, so it leans towards the far corner rather than
    /// towards the nearest one.
    DegreeCornerBiased,
}

/// A destination together with its score, lower is tried first.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Candidate {
    pub position: Position,
    pub score: i32,
}

impl Heuristic {
    pub fn rank(self, board: &Board, pos: Position) -> i32 {
        match self {
            Heuristic::None => 0,
            Heuristic::Degree => count_moves(board, pos) as i32,
            Heuristic::DegreeCornerBiased => {
                count_moves(board, pos) as i32 - pos.min_coordinate() as i32
            }
        }
    }

    /// Scored destinations from `pos`, stably sorted so ties keep generator order.
    pub fn candidates(self, board: &Board, pos: Position) -> SmallVec<[Candidate; 8]> {
        let mut candidates: SmallVec<[Candidate; 8]> = neighbors(board, pos)
            .into_iter()
            .map(|position| Candidate {
                position,
                score: self.rank(board, position),
            })
            .collect();
        candidates.sort_by_key(|candidate| candidate.score);
        return candidates;
    }

    /// Destinations from `pos` in the order a search should try them.
    pub fn order(self, board: &Board, pos: Position) -> Neighbors {
        match self {
            Heuristic::None => neighbors(board, pos),
            _ => self
                .candidates(board, pos)
                .into_iter()
                .map(|candidate| candidate.position)
                .collect(),
        }
    }
}

use crate::game::Position;

// knight offsets as (row, col), this order decides every tie
pub const MOVE_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const UNVISITED: i32 = -1;

pub const DEFAULT_START: Position = Position { row: 0, col: 0 };

pub(crate) const MILLIS_PER_SECOND: i64 = 1000;

// selectors accepted at the method prompt
pub const BFS_SELECTOR: i64 = 1;
pub const DFS_SELECTOR: i64 = 2;
pub const DFS_H1_SELECTOR: i64 = 3;
pub const DFS_H2_SELECTOR: i64 = 4;

pub const SOLUTION_FOUND: &str = "A solution found.";
pub const NO_SOLUTION: &str = "No solution exists or Timeout.";
pub const NODES_EXPANDED: &str = "Nodes expanded: ";

pub(crate) const SIZE_PROMPT: &str = "Enter board size (n): ";
pub(crate) const METHOD_PROMPT: &str = "Enter search method (1: BFS, 2: DFS, 3: DFS-h1b, 4: DFS-h2): ";
pub(crate) const TIME_PROMPT: &str = "Enter time limit (seconds): ";

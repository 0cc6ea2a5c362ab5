use std::fmt::{Display, Error, Formatter};
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::KnightError;
use crate::game::{Board, Position};

pub use budget::TimeBudget;
pub use ranking::{Candidate, Heuristic};

pub mod backtrack;
pub mod breadth;
pub mod budget;
pub mod ranking;


#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    BreadthFirst,
    DepthFirst,
    DepthFirstH1,
    DepthFirstH2,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::BreadthFirst,
        Method::DepthFirst,
        Method::DepthFirstH1,
        Method::DepthFirstH2,
    ];

    pub fn from_selector(selector: i64) -> Option<Method> {
        match selector {
            BFS_SELECTOR => Some(Method::BreadthFirst),
            DFS_SELECTOR => Some(Method::DepthFirst),
            DFS_H1_SELECTOR => Some(Method::DepthFirstH1),
            DFS_H2_SELECTOR => Some(Method::DepthFirstH2),
            _ => None,
        }
    }
    pub fn selector(self) -> i64 {
        match self {
            Method::BreadthFirst => BFS_SELECTOR,
            Method::DepthFirst => DFS_SELECTOR,
            Method::DepthFirstH1 => DFS_H1_SELECTOR,
            Method::DepthFirstH2 => DFS_H2_SELECTOR,
        }
    }
    /// Move ordering used when expanding a node, breadth first never ranks.
    pub fn heuristic(self) -> Heuristic {
        match self {
            Method::BreadthFirst | Method::DepthFirst => Heuristic::None,
            Method::DepthFirstH1 => Heuristic::Degree,
            Method::DepthFirstH2 => Heuristic::DegreeCornerBiased,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let name = match self {
            Method::BreadthFirst => "BFS",
            Method::DepthFirst => "DFS",
            Method::DepthFirstH1 => "DFS-h1b",
            Method::DepthFirstH2 => "DFS-h2",
        };
        write!(f, "{}", name)
    }
}

/// Everything one finished search has to say about itself.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub size: usize,
    pub method: Option<Method>,
    pub solved: bool,
    pub nodes_expanded: u64,
    pub elapsed_ms: u64,
    pub board: Board,
}

/// One search session: the board it owns, its time budget and the expansion counter.
///
/// Not finding a tour and running out of time both come back as `false`,
/// only the counter and the elapsed time tell them apart.
#[derive(Clone, Debug)]
pub struct KnightTour {
    pub(crate) board: Board,
    pub(crate) budget: TimeBudget,
    pub(crate) nodes_expanded: u64,
    method: Option<Method>,
    solved: bool,
    elapsed: Duration,
}

impl KnightTour {
    pub fn new(size: usize, time_limit_seconds: i64) -> Result<KnightTour, KnightError> {
        KnightTour::with_budget(size, TimeBudget::from_seconds(time_limit_seconds))
    }
    pub fn with_limit_millis(size: usize, limit_ms: i64) -> Result<KnightTour, KnightError> {
        KnightTour::with_budget(size, TimeBudget::from_millis(limit_ms))
    }
    fn with_budget(size: usize, budget: TimeBudget) -> Result<KnightTour, KnightError> {
        // steps are stored as i32, so n² has to fit one
        let fits = size.checked_mul(size).is_some_and(|cells| cells <= i32::MAX as usize);
        if size == 0 || !fits {
            return Err(KnightError::InvalidBoardSize(size));
        }
        return Ok(KnightTour {
            board: Board::new(size),
            budget,
            nodes_expanded: 0,
            method: None,
            solved: false,
            elapsed: Duration::ZERO,
        });
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn nodes_expanded(&self) -> u64 { self.nodes_expanded }
    pub fn elapsed(&self) -> Duration { self.elapsed }
    pub fn method(&self) -> Option<Method> { self.method }
    pub fn solved(&self) -> bool { self.solved }

    /// Searches with the method behind a numeric selector (1 to 4).
    /// The start square is claimed before dispatch, so an unknown selector
    /// leaves a board holding only the start and zero expansions.
    pub fn solve(&mut self, selector: i64, start: Position) -> Result<bool, KnightError> {
        self.begin(start)?;
        self.method = Method::from_selector(selector);
        let solved = match self.method {
            Some(method) => self.dispatch(method, start),
            None => {
                warn!("unrecognized search method {}, nothing searched", selector);
                false
            }
        };
        return Ok(self.finish(solved));
    }

    pub fn run(&mut self, method: Method, start: Position) -> Result<bool, KnightError> {
        self.begin(start)?;
        self.method = Some(method);
        let solved = self.dispatch(method, start);
        return Ok(self.finish(solved));
    }

    pub fn report(&self) -> SearchReport {
        SearchReport {
            size: self.board.size(),
            method: self.method,
            solved: self.solved,
            nodes_expanded: self.nodes_expanded,
            elapsed_ms: self.elapsed.as_millis().try_into().unwrap_or(u64::MAX),
            board: self.board.clone(),
        }
    }

    fn begin(&mut self, start: Position) -> Result<(), KnightError> {
        let size = self.board.size();
        if !self.board.contains(start) {
            return Err(KnightError::StartOutOfBounds { row: start.row, col: start.col, size });
        }
        self.board = Board::new(size);
        self.nodes_expanded = 0;
        self.solved = false;
        self.budget.restart();
        self.board.mark(start, 0);
        return Ok(());
    }

    fn dispatch(&mut self, method: Method, start: Position) -> bool {
        debug!(
            "searching {0}x{0} board from {1} with {2}, limit {3}ms",
            self.board.size(),
            start,
            method,
            self.budget.limit_millis()
        );
        match method {
            Method::BreadthFirst => self.breadth_first(start),
            Method::DepthFirst | Method::DepthFirstH1 | Method::DepthFirstH2 => {
                self.backtrack(start, method.heuristic())
            }
        }
    }

    fn finish(&mut self, solved: bool) -> bool {
        self.solved = solved;
        self.elapsed = self.budget.elapsed();
        debug!(
            "{} after {} expansions in {:?}",
            if solved { "solved" } else { "gave up" },
            self.nodes_expanded,
            self.elapsed
        );
        return solved;
    }

    /// Counts one unit of search work.
    pub(crate) fn expand(&mut self) {
        self.nodes_expanded += 1;
        coz::progress!("node expanded");
    }
}

use std::num::ParseIntError;

use thiserror::Error;

/// Fatal problems. A search that finds nothing is not one of them.
#[derive(Error, Debug)]
pub enum KnightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an integer for the {field}, got {token:?}: {source}")]
    Parse {
        field: &'static str,
        token: String,
        source: ParseIntError,
    },

    #[error("input ended before the {field} was read")]
    UnexpectedEof { field: &'static str },

    #[error("board size must be positive with a square that fits a step number, got {0}")]
    InvalidBoardSize(usize),

    #[error("start square ({row}, {col}) is outside the {size}x{size} board")]
    StartOutOfBounds { row: usize, col: usize, size: usize },
}

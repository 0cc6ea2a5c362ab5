use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::constants::*;
use crate::errors::KnightError;
use crate::game::Position;
use crate::solver::{KnightTour, SearchReport};

#[cfg(test)]
mod tests;

/// Whitespace separated tokens, pulled a line at a time so the three numbers
/// may come on one line or on several.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader {
            input,
            pending: VecDeque::new(),
        }
    }
    pub fn next_token(&mut self) -> Result<Option<String>, KnightError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        return Ok(self.pending.pop_front());
    }
    pub fn next_value<T>(&mut self, field: &'static str) -> Result<T, KnightError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let token = self
            .next_token()?
            .ok_or(KnightError::UnexpectedEof { field })?;
        return token
            .parse()
            .map_err(|source| KnightError::Parse { field, token, source });
    }
}

/// What the session asks for when a value was not given up front, and how it prints.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOptions {
    pub size: Option<usize>,
    pub method: Option<i64>,
    pub time_limit: Option<i64>,
    pub start: Position,
    pub color: bool,
    pub json: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            size: None,
            method: None,
            time_limit: None,
            start: DEFAULT_START,
            color: false,
            json: false,
        }
    }
}

fn ask<R, W, T>(
    reader: &mut TokenReader<R>,
    output: &mut W,
    given: Option<T>,
    prompt: &str,
    field: &'static str,
) -> Result<T, KnightError>
where
    R: BufRead,
    W: Write,
    T: FromStr<Err = std::num::ParseIntError>,
{
    if let Some(value) = given {
        return Ok(value);
    }
    write!(output, "{}", prompt)?;
    output.flush()?;
    return reader.next_value(field);
}

/// Prompts for size, method and time limit, searches, then prints the verdict,
/// the board and the expansion count.
pub fn run_session<R, W>(input: R, output: &mut W, options: &SessionOptions) -> Result<SearchReport, KnightError>
where
    R: BufRead,
    W: Write,
{
    let mut reader = TokenReader::new(input);
    let size: usize = ask(&mut reader, output, options.size, SIZE_PROMPT, "board size")?;
    let selector: i64 = ask(&mut reader, output, options.method, METHOD_PROMPT, "search method")?;
    let seconds: i64 = ask(&mut reader, output, options.time_limit, TIME_PROMPT, "time limit")?;

    let mut tour = KnightTour::new(size, seconds)?;
    let solved = tour.solve(selector, options.start)?;

    writeln!(output, "{}", if solved { SOLUTION_FOUND } else { NO_SOLUTION })?;
    if options.color {
        write!(output, "{}", tour.board().colored())?;
    } else {
        write!(output, "{}", tour.board())?;
    }
    writeln!(output, "{}{}", NODES_EXPANDED, tour.nodes_expanded())?;

    let report = tour.report();
    if options.json {
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    }
    return Ok(report);
}

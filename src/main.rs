use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use knights_tour::errors::KnightError;
use knights_tour::game::Position;
use knights_tour::prompt::{run_session, SessionOptions};

/// Searches for a knight's tour. Anything not given as a flag is asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "knights", version, about)]
struct Args {
    /// Board size n, for an n by n board
    #[arg(long)]
    size: Option<usize>,

    /// Search method: 1 BFS, 2 DFS, 3 DFS-h1b, 4 DFS-h2
    #[arg(long)]
    method: Option<i64>,

    /// Time limit in whole seconds
    #[arg(long = "time-limit")]
    time_limit: Option<i64>,

    /// Row of the start square
    #[arg(long, default_value_t = 0)]
    row: usize,

    /// Column of the start square
    #[arg(long, default_value_t = 0)]
    col: usize,

    /// Color the printed board
    #[arg(long)]
    color: bool,

    /// Also print the search report as JSON
    #[arg(long)]
    json: bool,
}

impl From<Args> for SessionOptions {
    fn from(args: Args) -> Self {
        SessionOptions {
            size: args.size,
            method: args.method,
            time_limit: args.time_limit,
            start: Position::new(args.row, args.col),
            color: args.color,
            json: args.json,
        }
    }
}

fn run(options: SessionOptions) -> Result<(), KnightError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(stdin.lock(), &mut stdout, &options)?;
    stdout.flush()?;
    return Ok(());
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let options = SessionOptions::from(Args::parse());
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

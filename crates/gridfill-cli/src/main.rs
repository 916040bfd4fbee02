//! Command-line front end for the gridfill solver.
//!
//! Reads a puzzle as 81 cells in row order (digits 1-9, with `0`, `.`, or
//! `_` for blanks, whitespace ignored), solves it, and prints the completed
//! grid. The grid model and the search live in `gridfill-core` and
//! `gridfill-solver`; this binary is only the I/O glue around them.

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process::ExitCode,
    str::FromStr as _,
};

use clap::Parser;
use gridfill_core::{Grid, ParseGridError, Position};
use gridfill_solver::{SolveError, solve};

/// Solve a sudoku puzzle with a plain backtracking search.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Puzzle as 81 cells (digits 1-9; 0, '.' or '_' for blanks)
    puzzle: Option<String>,

    /// Read the puzzle from a file instead ("-" for stdin)
    #[arg(short, long, value_name = "FILE", conflicts_with = "puzzle")]
    file: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read the puzzle: {_0}")]
    Read(io::Error),
    #[display("{_0}")]
    Parse(ParseGridError),
    #[display("{_0}")]
    Solve(SolveError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let text = read_puzzle(cli)?;
    let mut grid = Grid::from_str(&text)?;

    let givens = Position::ALL.iter().filter(|&&pos| grid[pos].is_some()).count();
    log::debug!("parsed puzzle with {givens} givens");

    solve(&mut grid)?;
    println!("{grid}");
    Ok(())
}

fn read_puzzle(cli: &Cli) -> Result<String, io::Error> {
    match (&cli.puzzle, &cli.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}

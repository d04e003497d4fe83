//! Solves a puzzle given on the command line and prints the result.
//!
//! The argument is 81 cells in row-major order: digits for clues, `.`, `_`,
//! or `0` for blanks. Without an argument a sample puzzle is solved. Set
//! `RUST_LOG=debug` to watch technique applications.

use std::process::ExitCode;

use deduku_core::Grid;
use deduku_solver::{Outcome, TechniqueSolver};

const SAMPLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn main() -> ExitCode {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let text = arg.as_deref().unwrap_or(SAMPLE);
    let mut grid: Grid = match text.parse() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let solver = TechniqueSolver::with_all_techniques();
    let (outcome, stats) = solver.solve(&mut grid);

    println!("{grid}");
    println!();
    match outcome {
        Outcome::Solved => println!("solved"),
        Outcome::Stuck { unsolved } => println!("stuck with {unsolved} cells unsolved"),
        Outcome::Contradiction { pos } => println!("contradiction at {pos}"),
    }
    println!(
        "{} placements, {} eliminations in {} steps",
        grid.placement_count(),
        grid.elimination_count(),
        stats.total_steps(),
    );
    for (technique, count) in solver.techniques().iter().zip(stats.applications()) {
        println!("  {:>4}x {}", count, technique.name());
    }

    match outcome {
        Outcome::Solved => ExitCode::SUCCESS,
        Outcome::Stuck { .. } | Outcome::Contradiction { .. } => ExitCode::FAILURE,
    }
}

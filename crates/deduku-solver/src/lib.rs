//! Deductive sudoku solver for the deduku engine.
//!
//! The solver applies human-style techniques (naked and hidden singles,
//! locked candidates, naked and hidden pairs) to a fixed point. It never
//! guesses or backtracks, so every placement it makes is a forced deduction,
//! and a grid it solves is solvable by a careful human.
//!
//! # Examples
//!
//! ```
//! use deduku_core::Grid;
//! use deduku_solver::{Outcome, TechniqueSolver};
//!
//! let mut grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//! let solver = TechniqueSolver::with_all_techniques();
//! let (outcome, _stats) = solver.solve(&mut grid);
//! assert_eq!(outcome, Outcome::Solved);
//! # Ok::<_, deduku_core::ParseGridError>(())
//! ```

pub use self::{error::*, technique_solver::*};

mod error;
pub mod technique;
mod technique_solver;
#[cfg(test)]
mod testing;

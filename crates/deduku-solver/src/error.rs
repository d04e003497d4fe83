use derive_more::{Display, Error, From};

use deduku_core::ConsistencyError;

/// An error raised while applying techniques to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// The grid violates the sudoku rules.
    #[display("grid is inconsistent: {_0}")]
    Inconsistent(ConsistencyError),
}

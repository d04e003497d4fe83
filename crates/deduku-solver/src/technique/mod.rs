//! Deductive solving techniques.
//!
//! Each technique implements [`Technique`]: given a grid, it either makes
//! progress (placing a digit or narrowing candidates) or reports that it
//! cannot. Techniques never guess; every change they make is forced by the
//! rules, so any grid they solve is solved without backtracking.

pub use self::{
    hidden_pair::*, hidden_single::*, locked_candidates::*, naked_pair::*, naked_single::*,
};

use deduku_core::Grid;

use crate::SolverError;

mod hidden_pair;
mod hidden_single;
mod locked_candidates;
mod naked_pair;
mod naked_single;

/// A deductive solving technique.
pub trait Technique: std::fmt::Debug + Send + Sync {
    /// Returns the conventional name of the technique.
    fn name(&self) -> &'static str;

    /// Clones the technique into a box.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies the technique to the grid.
    ///
    /// Returns `Ok(true)` if any cell was placed or any candidate removed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if propagation exposes a rule
    /// violation.
    fn apply(&self, grid: &mut Grid) -> Result<bool, SolverError>;
}

/// A boxed [`Technique`] trait object.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns all techniques, cheapest first.
///
/// The order matters: the solver retries from the front after every success,
/// so expensive pattern searches only run when the cheap scans are
/// exhausted.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle),
        Box::new(HiddenSingle),
        Box::new(LockedCandidates),
        Box::new(NakedPair),
        Box::new(HiddenPair),
    ]
}

/// Returns only the single-placement techniques.
///
/// Enough for easy puzzles, and useful for grading: a puzzle these alone
/// solve needs no candidate bookkeeping from a human.
#[must_use]
pub fn single_techniques() -> Vec<BoxedTechnique> {
    vec![Box::new(NakedSingle), Box::new(HiddenSingle)]
}

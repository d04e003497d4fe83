use deduku_core::{Grid, Position};

use crate::SolverError;
use crate::technique::{BoxedTechnique, all_techniques};

/// The result of running the solver to a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell is solved.
    Solved,
    /// No technique can make further progress.
    Stuck {
        /// The number of cells still unsolved.
        unsolved: usize,
    },
    /// The grid violates the sudoku rules.
    Contradiction {
        /// The cell where the violation was detected.
        pos: Position,
    },
}

/// Per-technique application counts for one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueSolverStats {
    applications: Vec<usize>,
    total_steps: usize,
}

impl TechniqueSolverStats {
    fn new(num_techniques: usize) -> Self {
        Self {
            applications: vec![0; num_techniques],
            total_steps: 0,
        }
    }

    /// Returns how many times each technique made progress, indexed like the
    /// solver's technique list.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of successful steps.
    #[must_use]
    pub const fn total_steps(&self) -> usize {
        self.total_steps
    }

    fn record(&mut self, technique_index: usize) {
        self.applications[technique_index] += 1;
        self.total_steps += 1;
    }
}

/// A solver that applies a fixed list of techniques to a fixed point.
///
/// Each step tries the techniques in order and applies the first one that
/// makes progress, then starts over from the front. Cheap techniques
/// therefore run to exhaustion before an expensive one is consulted, and an
/// expensive deduction is followed by another round of cheap scans.
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a solver with the given techniques, tried in order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with all techniques, cheapest first.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(all_techniques())
    }

    /// Returns the solver's techniques.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Creates a stats record sized for this solver's technique list.
    #[must_use]
    pub fn new_stats(&self) -> TechniqueSolverStats {
        TechniqueSolverStats::new(self.techniques.len())
    }

    /// Applies the first technique that makes progress.
    ///
    /// Returns `Ok(false)` when no technique changes the grid. Consistency
    /// is checked before and after the step so a technique can rely on a
    /// well-formed grid and a violation is caught at the step that
    /// introduced it.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid violates the rules
    /// before or after the step.
    pub fn step(
        &self,
        grid: &mut Grid,
        stats: &mut TechniqueSolverStats,
    ) -> Result<bool, SolverError> {
        grid.check_consistency()?;
        for (index, technique) in self.techniques.iter().enumerate() {
            if technique.apply(grid)? {
                log::debug!("{} made progress", technique.name());
                stats.record(index);
                grid.check_consistency()?;
                return Ok(true);
            }
            log::trace!("{} made no progress", technique.name());
        }
        Ok(false)
    }

    /// Runs the solver to a fixed point.
    ///
    /// Never guesses: the outcome is [`Outcome::Solved`] only if the
    /// techniques alone complete the grid, [`Outcome::Stuck`] when they run
    /// out of deductions, and [`Outcome::Contradiction`] when the grid (or a
    /// deduction from it) breaks the rules.
    pub fn solve(&self, grid: &mut Grid) -> (Outcome, TechniqueSolverStats) {
        let mut stats = self.new_stats();
        let outcome = self.solve_with_stats(grid, &mut stats);
        (outcome, stats)
    }

    /// Runs the solver to a fixed point, accumulating into existing stats.
    pub fn solve_with_stats(
        &self,
        grid: &mut Grid,
        stats: &mut TechniqueSolverStats,
    ) -> Outcome {
        loop {
            match self.step(grid, stats) {
                Ok(true) => {}
                Ok(false) => {
                    break if grid.is_complete() {
                        Outcome::Solved
                    } else {
                        Outcome::Stuck {
                            unsolved: grid.unsolved_count(),
                        }
                    };
                }
                Err(SolverError::Inconsistent(e)) => {
                    break Outcome::Contradiction { pos: e.position() };
                }
            }
        }
    }
}

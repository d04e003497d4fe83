//! Naked single: a cell whose candidate set has exactly one digit.
//!
//! That digit must go in that cell. This is the cheapest technique and the
//! one the assignment cascade already performs implicitly, so a full scan
//! usually finds work only on a freshly loaded grid, where given loading
//! deliberately leaves singletons uncommitted.

use deduku_core::{CellState, Grid, Position};

use crate::SolverError;

use super::{BoxedTechnique, Technique};

/// The naked single technique.
#[derive(Debug, Clone, Copy, Default)]
pub struct NakedSingle;

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        "Naked Single"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> Result<bool, SolverError> {
        let mut changed = false;
        loop {
            let mut progressed = false;
            for pos in Position::ALL {
                if let CellState::Unsolved(candidates) = grid.state_at(pos) {
                    if let Some(digit) = candidates.as_single() {
                        grid.assign(pos, digit)?;
                        progressed = true;
                    }
                }
            }
            if !progressed {
                break;
            }
            changed = true;
        }
        Ok(changed)
    }
}

//! Hidden single: a digit with exactly one candidate cell in a house.
//!
//! Even if that cell still holds other candidates, the digit has nowhere
//! else to go in the house, so it must be placed there.

use deduku_core::{Digit, Grid, House, Position};

use crate::SolverError;

use super::{BoxedTechnique, Technique};

/// The hidden single technique.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenSingle;

impl HiddenSingle {
    fn find(grid: &Grid) -> Option<(Position, Digit)> {
        for house in House::ALL {
            for digit in Digit::ALL {
                let cells = house.cells();
                if cells.iter().any(|&pos| grid.solved_value(pos) == Some(digit)) {
                    continue;
                }
                let mut found = None;
                for &pos in &cells {
                    if grid.is_candidate(pos, digit) {
                        if found.is_some() {
                            found = None;
                            break;
                        }
                        found = Some(pos);
                    }
                }
                if let Some(pos) = found {
                    return Some((pos, digit));
                }
            }
        }
        None
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        "Hidden Single"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> Result<bool, SolverError> {
        let mut changed = false;
        while let Some((pos, digit)) = Self::find(grid) {
            grid.assign(pos, digit)?;
            changed = true;
        }
        Ok(changed)
    }
}

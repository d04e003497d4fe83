//! Locked candidates: a digit confined to one box-line intersection.
//!
//! Pointing: if all of a box's candidate cells for a digit lie in one row or
//! column, the digit must be placed in that box, so it can be removed from
//! the rest of the line.
//!
//! Claiming: if all of a row's or column's candidate cells for a digit lie in
//! one box, the digit must be placed in that line, so it can be removed from
//! the rest of the box.

use deduku_core::{Digit, Grid, House, Position};

use crate::SolverError;

use super::{BoxedTechnique, Technique};

/// The locked candidates technique, pointing and claiming.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockedCandidates;

impl LockedCandidates {
    /// Finds, per digit, the cells of `house` that still hold the digit as a
    /// candidate. Returns `None` when the digit is solved in the house or
    /// has no candidate cells left.
    fn candidate_cells(grid: &Grid, house: House, digit: Digit) -> Option<Vec<Position>> {
        let cells = house.cells();
        if cells.iter().any(|&pos| grid.solved_value(pos) == Some(digit)) {
            return None;
        }
        let holders: Vec<_> = cells
            .iter()
            .copied()
            .filter(|&pos| grid.is_candidate(pos, digit))
            .collect();
        if holders.is_empty() { None } else { Some(holders) }
    }

    /// Eliminates `digit` from the cells of `house` outside `locked`.
    fn eliminate_rest(
        grid: &mut Grid,
        house: House,
        locked: House,
        digit: Digit,
    ) -> Result<bool, SolverError> {
        let mut changed = false;
        for pos in house.cells() {
            if !locked.contains(pos) && grid.eliminate(pos, digit)? {
                changed = true;
            }
        }
        Ok(changed)
    }
}

impl Technique for LockedCandidates {
    fn name(&self) -> &'static str {
        "Locked Candidates"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> Result<bool, SolverError> {
        let mut changed = false;

        // Pointing: box candidates confined to one line.
        for box_house in House::BOXES {
            for digit in Digit::ALL {
                let Some(holders) = Self::candidate_cells(grid, box_house, digit) else {
                    continue;
                };
                let first = holders[0];
                let lines = [
                    House::Row { y: first.y() },
                    House::Column { x: first.x() },
                ];
                for line in lines {
                    if holders.iter().all(|&pos| line.contains(pos))
                        && Self::eliminate_rest(grid, line, box_house, digit)?
                    {
                        changed = true;
                    }
                }
            }
        }

        // Claiming: line candidates confined to one box.
        for line in House::ROWS.iter().chain(&House::COLUMNS).copied() {
            for digit in Digit::ALL {
                let Some(holders) = Self::candidate_cells(grid, line, digit) else {
                    continue;
                };
                let box_house = House::Box {
                    index: holders[0].box_index(),
                };
                if holders.iter().all(|&pos| box_house.contains(pos))
                    && Self::eliminate_rest(grid, box_house, line, digit)?
                {
                    changed = true;
                }
            }
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::TechniqueTester;

    use super::*;

    #[test]
    fn test_pointing_pair_in_row() {
        // In box 0, digit 1 is excluded from rows 0 and 1 by the clues, so
        // its candidates sit in row 2 of the box. The rest of row 2 loses 1.
        TechniqueTester::from_str(
            LockedCandidates,
            "___1_____
             ______1__
             _________
             _________
             _________
             _________
             _________
             _________
             _________",
        )
        .apply_once()
        .assert_removed_includes(3, 2, &[1])
        .assert_removed_includes(8, 2, &[1]);
    }

    #[test]
    fn test_claiming_row_into_box() {
        // Columns 3-8 of row 0 are filled, so digits 1, 8, and 9 can only
        // sit in columns 0-2 of the row (box 0). The rest of box 0 loses
        // all three.
        TechniqueTester::from_str(
            LockedCandidates,
            "___234567
             _________
             _________
             _________
             _________
             _________
             _________
             _________
             _________",
        )
        .apply_once()
        .assert_removed_exact(0, 1, &[1, 8, 9])
        .assert_removed_exact(2, 2, &[1, 8, 9]);
    }

    #[test]
    fn test_no_change_when_unconfined() {
        TechniqueTester::from_str(
            LockedCandidates,
            "_________
             _________
             _________
             _________
             _________
             _________
             _________
             _________
             _________",
        )
        .apply_once()
        .assert_no_change();
    }
}

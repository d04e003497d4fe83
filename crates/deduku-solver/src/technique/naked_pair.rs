//! Naked pair: two cells in a house with the same two candidates.
//!
//! The two digits must occupy those two cells in some order, so they can be
//! removed from every other cell of the house.

use deduku_core::{Grid, House};

use crate::SolverError;

use super::{BoxedTechnique, Technique};

/// The naked pair technique.
#[derive(Debug, Clone, Copy, Default)]
pub struct NakedPair;

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        "Naked Pair"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> Result<bool, SolverError> {
        let mut changed = false;
        for house in House::ALL {
            let cells = house.cells();
            for (i, &first) in cells.iter().enumerate() {
                let pair = grid.candidates_at(first);
                if pair.len() != 2 {
                    continue;
                }
                for &second in &cells[i + 1..] {
                    if grid.candidates_at(second) != pair {
                        continue;
                    }
                    for &other in &cells {
                        if other != first
                            && other != second
                            && grid.eliminate_set(other, pair)?
                        {
                            changed = true;
                        }
                    }
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
    fn test_pair_in_row_forces_third_cell() {
        TechniqueTester::new(NakedPair)
            .with_candidates(0, 0, &[1, 2, 3])
            .with_candidates(1, 0, &[1, 2])
            .with_candidates(3, 0, &[1, 2])
            .apply_once()
            .assert_placed(0, 0, 3);
    }

    #[test]
    fn test_pair_in_column_trims_candidates() {
        TechniqueTester::new(NakedPair)
            .with_candidates(4, 0, &[5, 6])
            .with_candidates(4, 8, &[5, 6])
            .with_candidates(4, 4, &[4, 5, 6, 7])
            .apply_once()
            .assert_removed_exact(4, 4, &[5, 6]);
    }

    #[test]
    fn test_extra_candidates_are_not_a_naked_pair() {
        // Digits 7 and 8 are confined to (0, 0) and (1, 0) of box 0, but
        // both cells carry a third candidate, so only the hidden pair sees
        // the pattern. This technique must not fire.
        TechniqueTester::new(NakedPair)
            .with_candidates(0, 0, &[2, 7, 8])
            .with_candidates(1, 0, &[7, 8, 9])
            .with_candidates(2, 0, &[1, 2, 3])
            .with_candidates(0, 1, &[1, 2, 3])
            .with_candidates(1, 1, &[2, 3, 4])
            .with_candidates(2, 1, &[3, 4, 5])
            .with_candidates(0, 2, &[4, 5, 6])
            .with_candidates(1, 2, &[5, 6, 1])
            .with_candidates(2, 2, &[6, 1, 2])
            .apply_once()
            .assert_no_change();
    }

    #[test]
    fn test_two_candidate_cells_in_different_houses_do_nothing() {
        TechniqueTester::new(NakedPair)
            .with_candidates(0, 0, &[1, 2])
            .with_candidates(8, 8, &[1, 2])
            .apply_once()
            .assert_no_change();
    }
}

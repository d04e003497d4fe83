//! Hidden pair: two digits whose candidate cells in a house coincide.
//!
//! If digits `a` and `b` each appear as candidates in exactly the same two
//! cells of a house, those cells must hold `a` and `b` in some order, and
//! every other candidate can be stripped from them.
//!
//! Unlike the naked pair, the two cells may still carry extra candidates, so
//! this search is over digit pairs rather than cell contents and is the most
//! expensive technique in the set.

use deduku_core::{Digit, DigitSet, Grid, House, Position};

use crate::SolverError;

use super::{BoxedTechnique, Technique};

/// The hidden pair technique.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenPair;

impl HiddenPair {
    /// Returns the two cells holding both digits of `pair`, if the pair is
    /// hidden in `house`: no other cell of the house may hold either digit,
    /// and neither digit may already be solved there.
    fn find_in_house(grid: &Grid, house: House, pair: DigitSet) -> Option<[Position; 2]> {
        let mut first = None;
        let mut second = None;
        for pos in house.cells() {
            if let Some(digit) = grid.solved_value(pos) {
                if pair.contains(digit) {
                    return None;
                }
                continue;
            }
            let held = grid.candidates_at(pos).intersection(pair);
            if held.is_empty() {
                continue;
            }
            // A cell holding only one digit of the pair, or a third cell
            // holding both, breaks the pattern.
            if held != pair || second.is_some() {
                return None;
            }
            match first {
                None => first = Some(pos),
                Some(_) => second = Some(pos),
            }
        }
        match (first, second) {
            (Some(a), Some(b)) => Some([a, b]),
            _ => None,
        }
    }
}

impl Technique for HiddenPair {
    fn name(&self) -> &'static str {
        "Hidden Pair"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> Result<bool, SolverError> {
        let mut changed = false;
        for (i, &a) in Digit::ALL.iter().enumerate() {
            for &b in &Digit::ALL[i + 1..] {
                let pair = DigitSet::from_elem(a) | DigitSet::from_elem(b);
                for house in House::ALL {
                    let Some(cells) = Self::find_in_house(grid, house, pair) else {
                        continue;
                    };
                    for pos in cells {
                        if grid.eliminate_set(pos, !pair)? {
                            changed = true;
                        }
                    }
                }
            }
        }
        Ok(changed)
    }
}

//! Single-cell state packed into a `u16`.
//!
//! Bit 15 is the solved flag. A solved cell stores the digit value (1-9) in
//! the low bits; an unsolved cell stores its candidate set as a 9-bit mask.
//! The flag keeps the two payloads unambiguous: a lone candidate bit does not
//! make a cell solved until a technique commits the placement.

use std::fmt::{self, Display};

use crate::digit::Digit;
use crate::digit_set::DigitSet;

const SOLVED: u16 = 0x8000;

/// A single board cell: either a placed digit or a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u16);

impl Cell {
    /// An unsolved cell with all nine candidates.
    pub const UNSOLVED: Self = Self(DigitSet::FULL.mask());

    /// Creates a solved cell holding `digit`.
    #[must_use]
    pub const fn solved(digit: Digit) -> Self {
        Self(SOLVED | digit.value() as u16)
    }

    /// Creates an unsolved cell with the given candidates.
    #[must_use]
    pub const fn unsolved(candidates: DigitSet) -> Self {
        Self(candidates.mask())
    }

    /// Returns `true` if a digit has been placed in this cell.
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 & SOLVED != 0
    }

    /// Returns the placed digit, or `None` if the cell is unsolved.
    #[must_use]
    pub const fn value(self) -> Option<Digit> {
        if self.is_solved() {
            #[expect(clippy::cast_possible_truncation)]
            let value = (self.0 & !SOLVED) as u8;
            Digit::try_from_value(value)
        } else {
            None
        }
    }

    /// Returns the candidate set. Solved cells have no candidates.
    #[must_use]
    pub const fn candidates(self) -> DigitSet {
        if self.is_solved() {
            DigitSet::EMPTY
        } else {
            DigitSet::from_mask(self.0)
        }
    }

    /// Returns the cell state as an enum for matching.
    #[must_use]
    pub fn state(self) -> CellState {
        match self.value() {
            Some(digit) => CellState::Solved(digit),
            None => CellState::Unsolved(self.candidates()),
        }
    }

    /// Removes `candidates` from an unsolved cell.
    ///
    /// Returns `true` if any candidate was actually removed. Solved cells are
    /// left untouched.
    pub const fn remove(&mut self, candidates: DigitSet) -> bool {
        if self.is_solved() {
            return false;
        }
        let before = self.0;
        self.0 &= !candidates.mask();
        self.0 != before
    }

    /// Replaces an unsolved cell's candidates with `candidates ∩ current`.
    ///
    /// Returns `true` if the set shrank. Solved cells are left untouched.
    pub const fn retain(&mut self, candidates: DigitSet) -> bool {
        if self.is_solved() {
            return false;
        }
        let before = self.0;
        self.0 &= candidates.mask();
        self.0 != before
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::UNSOLVED
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(digit) => Display::fmt(&digit, f),
            None => f.write_str("_"),
        }
    }
}

/// The state of a [`Cell`], unpacked for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// A digit has been placed.
    Solved(Digit),
    /// The cell is open with the given candidates.
    Unsolved(DigitSet),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_unsolved_default() {
        let cell = Cell::default();
        assert!(!cell.is_solved());
        assert_eq!(cell.value(), None);
        assert_eq!(cell.candidates(), DigitSet::FULL);
        assert_eq!(cell.state(), CellState::Unsolved(DigitSet::FULL));
    }

    #[test]
    fn test_solved() {
        for digit in Digit::ALL {
            let cell = Cell::solved(digit);
            assert!(cell.is_solved());
            assert_eq!(cell.value(), Some(digit));
            assert_eq!(cell.candidates(), DigitSet::EMPTY);
            assert_eq!(cell.state(), CellState::Solved(digit));
        }
    }

    #[test]
    fn test_solved_flag_disambiguates_single_candidate() {
        // A lone candidate bit is still an unsolved cell.
        let cell = Cell::unsolved(DigitSet::from_elem(D5));
        assert!(!cell.is_solved());
        assert_eq!(cell.value(), None);
        assert_eq!(cell.candidates().as_single(), Some(D5));
    }

    #[test]
    fn test_remove() {
        let mut cell = Cell::UNSOLVED;
        assert!(cell.remove(DigitSet::from_elem(D3)));
        assert!(!cell.candidates().contains(D3));
        assert_eq!(cell.candidates().len(), 8);
        // Removing again is a no-op.
        assert!(!cell.remove(DigitSet::from_elem(D3)));
    }

    #[test]
    fn test_remove_ignores_solved() {
        let mut cell = Cell::solved(D7);
        assert!(!cell.remove(DigitSet::FULL));
        assert_eq!(cell.value(), Some(D7));
    }

    #[test]
    fn test_retain() {
        let mut cell = Cell::UNSOLVED;
        let pair = DigitSet::from_elem(D1) | DigitSet::from_elem(D2);
        assert!(cell.retain(pair));
        assert_eq!(cell.candidates(), pair);
        assert!(!cell.retain(pair));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::solved(D9).to_string(), "9");
        assert_eq!(Cell::UNSOLVED.to_string(), "_");
    }
}

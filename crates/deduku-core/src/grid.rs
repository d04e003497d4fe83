//! The 81-cell board with constraint propagation.
//!
//! [`Grid`] owns the cells and the two mutation primitives every technique is
//! built from:
//!
//! - [`Grid::assign`] places a digit and eliminates it from all peers,
//!   cascading: a peer reduced to a single candidate is assigned in turn.
//! - [`Grid::eliminate`] removes one candidate from one cell, with the same
//!   cascade on a resulting singleton.
//!
//! Given loading ([`Grid::place_given`]) deliberately skips the cascade so
//! that clue entry order cannot trigger deductions before solving starts.
//! The grid also counts placements and eliminations so solver callers can
//! report work done without any global state.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};

use crate::cell::{Cell, CellState};
use crate::digit::Digit;
use crate::digit_set::DigitSet;
use crate::house::House;
use crate::position::Position;

/// A state that violates the one-digit-per-cell or one-cell-per-digit rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConsistencyError {
    /// An unsolved cell has no remaining candidates.
    #[display("cell {pos} has no remaining candidates")]
    NoCandidates {
        /// The exhausted cell.
        pos: Position,
    },
    /// The same digit is placed twice in one house.
    #[display("digit {digit} is placed twice in a house, second at {pos}")]
    DuplicateDigit {
        /// The second occurrence of the digit.
        pos: Position,
        /// The duplicated digit.
        digit: Digit,
    },
}

impl ConsistencyError {
    /// Returns the cell where the violation was detected.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Self::NoCandidates { pos } | Self::DuplicateDigit { pos, .. } => pos,
        }
    }
}

/// An error parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A character other than a digit, blank marker, or whitespace.
    #[display("invalid character {ch:?} in grid")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("expected 81 cells, found {len}")]
    WrongLength {
        /// The number of cells found.
        len: usize,
    },
}

/// The 9x9 board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
    placements: usize,
    eliminations: usize,
}

impl Grid {
    /// Creates an empty grid with every cell open to all nine digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::UNSOLVED; 81],
            placements: 0,
            eliminations: 0,
        }
    }

    /// Creates a grid from 81 clue values in row-major order, 0 for blank.
    ///
    /// Clues are loaded with [`Self::place_given`] and then the counters are
    /// reset, so counts reflect solving work only.
    ///
    /// # Panics
    ///
    /// Panics if a value is outside 0-9.
    #[must_use]
    pub fn from_givens(givens: &[u8; 81]) -> Self {
        let mut grid = Self::new();
        for (i, &value) in givens.iter().enumerate() {
            if value != 0 {
                grid.place_given(Position::from_index(i), Digit::from_value(value));
            }
        }
        grid.reset_counters();
        grid
    }

    /// Places a clue without triggering the naked-single cascade.
    ///
    /// The digit is still eliminated from all peers, but a peer reduced to a
    /// single candidate stays unsolved until a technique commits it. This
    /// keeps given loading insensitive to entry order. A conflicting clue is
    /// accepted here and reported later by [`Self::check_consistency`].
    pub fn place_given(&mut self, pos: Position, digit: Digit) {
        self.set_solved(pos, digit);
        let single = DigitSet::from_elem(digit);
        for house in pos.houses() {
            for peer in house.cells() {
                if peer != pos && self.cells[peer.index()].remove(single) {
                    self.eliminations += 1;
                }
            }
        }
    }

    /// Places a digit and propagates: the digit is eliminated from all peers,
    /// and any peer left with a single candidate is assigned recursively.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::NoCandidates`] if the cascade empties a
    /// cell's candidate set.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<(), ConsistencyError> {
        self.set_solved(pos, digit);
        for house in pos.houses() {
            for peer in house.cells() {
                if peer != pos {
                    self.eliminate(peer, digit)?;
                }
            }
        }
        Ok(())
    }

    /// Removes one candidate from a cell.
    ///
    /// Returns `Ok(true)` if the candidate was present and removed. Solved
    /// cells and absent candidates are no-ops. A cell reduced to a single
    /// candidate is assigned via [`Self::assign`], cascading further.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::NoCandidates`] if the removal (or its
    /// cascade) empties a cell's candidate set.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> Result<bool, ConsistencyError> {
        self.eliminate_set(pos, DigitSet::from_elem(digit))
    }

    /// Removes a set of candidates from a cell, cascading like
    /// [`Self::eliminate`].
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::NoCandidates`] if the removal (or its
    /// cascade) empties a cell's candidate set.
    pub fn eliminate_set(
        &mut self,
        pos: Position,
        candidates: DigitSet,
    ) -> Result<bool, ConsistencyError> {
        let cell = &mut self.cells[pos.index()];
        if !cell.remove(candidates) {
            return Ok(false);
        }
        self.eliminations += 1;
        let remaining = self.cells[pos.index()].candidates();
        if remaining.is_empty() {
            return Err(ConsistencyError::NoCandidates { pos });
        }
        if let Some(digit) = remaining.as_single() {
            self.assign(pos, digit)?;
        }
        Ok(true)
    }

    fn set_solved(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Cell::solved(digit);
        self.placements += 1;
    }

    /// Checks the whole grid for rule violations.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: an unsolved cell with an empty
    /// candidate set, or a digit placed twice in one house (reported at the
    /// second occurrence).
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for pos in Position::ALL {
            if let CellState::Unsolved(candidates) = self.state_at(pos) {
                if candidates.is_empty() {
                    return Err(ConsistencyError::NoCandidates { pos });
                }
            }
        }
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.cells() {
                if let Some(digit) = self.solved_value(pos) {
                    if !seen.insert(digit) {
                        return Err(ConsistencyError::DuplicateDigit { pos, digit });
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn state_at(&self, pos: Position) -> CellState {
        self.cells[pos.index()].state()
    }

    /// Returns the candidate set at `pos`. Solved cells have no candidates.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()].candidates()
    }

    /// Returns the placed digit at `pos`, or `None` if the cell is unsolved.
    #[must_use]
    pub fn solved_value(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].value()
    }

    /// Returns `true` if the cell at `pos` is unsolved and holds `digit` as a
    /// candidate.
    #[must_use]
    pub fn is_candidate(&self, pos: Position, digit: Digit) -> bool {
        self.candidates_at(pos).contains(digit)
    }

    /// Returns `true` if a digit has been placed at `pos`.
    #[must_use]
    pub fn is_solved(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_solved()
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_solved()).count()
    }

    /// Returns the number of unsolved cells.
    #[must_use]
    pub fn unsolved_count(&self) -> usize {
        81 - self.solved_count()
    }

    /// Returns `true` if all 81 cells are solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_solved())
    }

    /// Iterates over all cells in row-major order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        Position::ALL
            .iter()
            .map(|&pos| (pos, self.cells[pos.index()].state()))
    }

    /// Returns the number of digit placements since the last counter reset.
    #[must_use]
    pub const fn placement_count(&self) -> usize {
        self.placements
    }

    /// Returns the number of candidate eliminations since the last counter
    /// reset.
    #[must_use]
    pub const fn elimination_count(&self) -> usize {
        self.eliminations
    }

    /// Resets the placement and elimination counters to zero.
    pub const fn reset_counters(&mut self) {
        self.placements = 0;
        self.eliminations = 0;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses 81 cells from text.
    ///
    /// `1`-`9` are clues; `.`, `_`, and `0` are blanks; whitespace is
    /// ignored. Anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut givens = [0_u8; 81];
        let mut len = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let value = match ch {
                '.' | '_' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(ParseGridError::InvalidChar { ch }),
            };
            if len < 81 {
                givens[len] = value;
            }
            len += 1;
        }
        if len != 81 {
            return Err(ParseGridError::WrongLength { len });
        }
        Ok(Self::from_givens(&givens))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                write!(f, "{}", self.cells[Position::new(x, y).index()])?;
            }
            if y < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

//! Test harness for exercising a single technique against a grid.

use deduku_core::{Digit, DigitSet, Grid, Position};

use crate::technique::Technique;

/// Applies one technique to a grid and asserts on the resulting changes.
///
/// The grid is built either from text ([`Self::from_str`]) or cell by cell
/// ([`Self::with_candidates`]); the state at the first `apply_*` call is the
/// baseline the `assert_*` methods compare against.
pub struct TechniqueTester<T> {
    technique: T,
    initial: Grid,
    current: Grid,
}

impl<T> TechniqueTester<T>
where
    T: Technique,
{
    /// Creates a tester over an empty grid.
    pub fn new(technique: T) -> Self {
        Self {
            technique,
            initial: Grid::new(),
            current: Grid::new(),
        }
    }

    /// Creates a tester over a grid parsed from text.
    #[track_caller]
    pub fn from_str(technique: T, text: &str) -> Self {
        let grid: Grid = text.parse().expect("invalid grid text");
        Self {
            technique,
            initial: grid.clone(),
            current: grid,
        }
    }

    /// Restricts the cell at `(x, y)` to the given candidate values.
    #[track_caller]
    pub fn with_candidates(mut self, x: u8, y: u8, values: &[u8]) -> Self {
        let keep: DigitSet = values.iter().map(|&v| Digit::from_value(v)).collect();
        assert!(keep.len() >= 2, "a single candidate would be auto-assigned");
        let pos = Position::new(x, y);
        for grid in [&mut self.initial, &mut self.current] {
            grid.eliminate_set(pos, !keep)
                .expect("candidate restriction emptied a cell");
        }
        self
    }

    /// Applies the technique once and asserts it made progress, unless the
    /// tester expects no change.
    #[track_caller]
    pub fn apply_once(mut self) -> Self {
        let changed = self
            .technique
            .apply(&mut self.current)
            .expect("technique reported an inconsistency");
        assert_eq!(
            changed,
            self.initial != self.current,
            "technique return value disagrees with grid change",
        );
        self
    }

    /// Applies the technique until it reports no further progress.
    #[track_caller]
    pub fn apply_until_stuck(mut self) -> Self {
        while self
            .technique
            .apply(&mut self.current)
            .expect("technique reported an inconsistency")
        {}
        self
    }

    /// Asserts that the cell at `(x, y)` is now solved with `value` and was
    /// not solved initially.
    #[track_caller]
    pub fn assert_placed(self, x: u8, y: u8, value: u8) -> Self {
        let pos = Position::new(x, y);
        assert!(
            !self.initial.is_solved(pos),
            "{pos} was already solved in the initial grid",
        );
        assert_eq!(
            self.current.solved_value(pos),
            Some(Digit::from_value(value)),
            "expected {value} placed at {pos}",
        );
        self
    }

    /// Asserts that the candidates removed from `(x, y)` include `values`.
    #[track_caller]
    pub fn assert_removed_includes(self, x: u8, y: u8, values: &[u8]) -> Self {
        let removed = self.removed_at(x, y);
        for &value in values {
            assert!(
                removed.contains(Digit::from_value(value)),
                "expected {value} removed at ({x}, {y}), removed: {removed:?}",
            );
        }
        self
    }

    /// Asserts that the candidates removed from `(x, y)` are exactly
    /// `values`.
    #[track_caller]
    pub fn assert_removed_exact(self, x: u8, y: u8, values: &[u8]) -> Self {
        let expected: DigitSet = values.iter().map(|&v| Digit::from_value(v)).collect();
        let removed = self.removed_at(x, y);
        assert_eq!(
            removed, expected,
            "removed candidates at ({x}, {y}) differ",
        );
        self
    }

    /// Asserts that the technique changed nothing.
    #[track_caller]
    pub fn assert_no_change(self) -> Self {
        assert_eq!(
            self.initial, self.current,
            "expected no change, but the grid differs",
        );
        self
    }

    fn removed_at(&self, x: u8, y: u8) -> DigitSet {
        let pos = Position::new(x, y);
        self.initial
            .candidates_at(pos)
            .difference(self.current.candidates_at(pos))
    }
}

//! A set of candidate digits (1-9) for a single cell.
//!
//! This module provides [`DigitSet`], a 9-bit set over [`Digit`] backed by a
//! `u16`. Bit `v - 1` represents "digit `v` is still possible", so the full
//! set is the mask `0x01FF`.
//!
//! # Examples
//!
//! ```
//! use deduku_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert!(candidates.contains(Digit::D1));
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitmask.
///
/// Provides efficient storage and fast set operations for tracking which
/// digits can still be placed in a sudoku cell.
///
/// # Set Operations
///
/// ```
/// use deduku_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK: u16 = 0x01FF;

const fn bit(digit: Digit) -> u16 {
    1 << (digit.value() - 1)
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(bit(digit))
    }

    /// Reconstructs a set from its raw 9-bit mask.
    ///
    /// # Panics
    ///
    /// Panics if `mask` has bits set outside the low nine.
    #[must_use]
    pub const fn from_mask(mask: u16) -> Self {
        assert!(mask & !MASK == 0);
        Self(mask)
    }

    /// Returns the raw 9-bit mask.
    #[must_use]
    pub const fn mask(self) -> u16 {
        self.0
    }

    /// Inserts a digit. Returns `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let changed = self.0 & bit(digit) == 0;
        self.0 |= bit(digit);
        changed
    }

    /// Removes a digit. Returns `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let changed = self.0 & bit(digit) != 0;
        self.0 &= !bit(digit);
        changed
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit if the set has exactly one element.
    ///
    /// This is the naked-single test: a cell whose candidate set collapses to
    /// a singleton is decided.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduku_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D4).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        Digit::try_from_value(value)
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every digit of `other` is in `self`.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Digits {
        Digits(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|d| d.value())).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & MASK)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Digits;

    fn into_iter(self) -> Digits {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Digits(u16);

impl Iterator for Digits {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::try_from_value(self.0.trailing_zeros() as u8 + 1)?;
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Digits {}
impl ExactSizeIterator for Digits {}

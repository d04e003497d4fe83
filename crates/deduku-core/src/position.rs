//! Board position types.
//!
//! A [`Position`] names one of the 81 cells of the board by `(x, y)`
//! coordinates, where `x` is the column and `y` is the row, both 0-8. The
//! row-major cell index is `y * 9 + x`.
//!
//! All unit membership tables ([`Position::ROWS`], [`Position::COLUMNS`],
//! [`Position::BOXES`]) are derived by formula at compile time rather than
//! hand-authored, with box membership computed as `(y / 3) * 3 + x / 3`.

use std::fmt::{self, Display};

use crate::house::House;

/// A board position `(x, y)` with `x` and `y` in 0-8.
///
/// # Examples
///
/// ```
/// use deduku_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// assert_eq!(pos.box_index(), 1);
/// assert_eq!(Position::from_index(pos.index()), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// The nine positions of each row, indexed by `y`.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y as usize][x as usize] = Self { x, y };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// The nine positions of each column, indexed by `x`.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x as usize][y as usize] = Self { x, y };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// The nine positions of each 3x3 box, indexed by box index
    /// (left to right, top to bottom).
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut b = 0;
        while b < 9 {
            let mut i = 0;
            while i < 9 {
                boxes[b as usize][i as usize] = Self::from_box(b, i);
                i += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a position from `(x, y)` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if either argument is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        let origin = Self::box_origin(box_index);
        Self {
            x: origin.x + i % 3,
            y: origin.y + i / 3,
        }
    }

    /// Returns the top-left position of a box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is 9 or greater.
    #[must_use]
    pub const fn box_origin(box_index: u8) -> Self {
        assert!(box_index < 9);
        Self {
            x: (box_index % 3) * 3,
            y: (box_index / 3) * 3,
        }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns this position's cell index within its box (0-8).
    #[must_use]
    pub const fn box_cell_index(self) -> u8 {
        (self.y % 3) * 3 + self.x % 3
    }

    /// Returns the three houses containing this position: its row, column,
    /// and box.
    ///
    /// The peers of a cell are the other members of these houses.
    #[must_use]
    pub const fn houses(self) -> [House; 3] {
        [
            House::Row { y: self.y },
            House::Column { x: self.x },
            House::Box {
                index: self.box_index(),
            },
        ]
    }

    /// Returns `true` if `other` shares a row, column, or box with `self`
    /// and is a different cell.
    #[must_use]
    pub const fn is_peer(self, other: Self) -> bool {
        if self.x == other.x && self.y == other.y {
            return false;
        }
        self.x == other.x || self.y == other.y || self.box_index() == other.box_index()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), *pos);
        }
    }

    #[test]
    fn test_box_index_formula() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_round_trip() {
        for b in 0..9 {
            for i in 0..9 {
                let pos = Position::from_box(b, i);
                assert_eq!(pos.box_index(), b);
                assert_eq!(pos.box_cell_index(), i);
            }
        }
    }

    #[test]
    fn test_unit_tables_partition_the_board() {
        // Every cell appears exactly once per table.
        for table in [&Position::ROWS, &Position::COLUMNS, &Position::BOXES] {
            let mut seen = [false; 81];
            for unit in table.iter() {
                for pos in unit {
                    assert!(!seen[pos.index()], "{pos} appears twice");
                    seen[pos.index()] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_is_peer() {
        let pos = Position::new(4, 4);
        assert!(pos.is_peer(Position::new(8, 4))); // same row
        assert!(pos.is_peer(Position::new(4, 0))); // same column
        assert!(pos.is_peer(Position::new(3, 5))); // same box
        assert!(!pos.is_peer(pos));
        assert!(!pos.is_peer(Position::new(0, 0)));
    }

    #[test]
    fn test_houses() {
        let [row, col, box_] = Position::new(7, 2).houses();
        assert_eq!(row, House::Row { y: 2 });
        assert_eq!(col, House::Column { x: 7 });
        assert_eq!(box_, House::Box { index: 2 });
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}

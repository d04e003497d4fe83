//! Houses are the 27 units of the board: 9 rows, 9 columns, and 9 boxes.
//!
//! Every deductive technique reasons about candidate placement within one or
//! more houses, so [`House`] carries its member cells and a containment test.

use std::fmt::{self, Display};

use crate::position::Position;

/// One of the 27 units of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// The row with the given `y` coordinate.
    Row {
        /// Row coordinate (0-8).
        y: u8,
    },
    /// The column with the given `x` coordinate.
    Column {
        /// Column coordinate (0-8).
        x: u8,
    },
    /// The 3x3 box with the given index (left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// The nine rows, top to bottom.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// The nine columns, left to right.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// The nine boxes, left to right, top to bottom.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut index = 0;
        while index < 9 {
            boxes[index as usize] = Self::Box { index };
            index += 1;
        }
        boxes
    };

    /// All 27 houses: rows, then columns, then boxes.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Returns the position of the `i`-th cell of this house (0-8).
    ///
    /// Rows enumerate left to right, columns top to bottom, and boxes in
    /// row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is 9 or greater.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine member cells of this house.
    #[must_use]
    pub const fn cells(self) -> [Position; 9] {
        match self {
            Self::Row { y } => Position::ROWS[y as usize],
            Self::Column { x } => Position::COLUMNS[x as usize],
            Self::Box { index } => Position::BOXES[index as usize],
        }
    }

    /// Returns `true` if `pos` is a member of this house.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row { y } => pos.y() == y,
            Self::Column { x } => pos.x() == x,
            Self::Box { index } => pos.box_index() == index,
        }
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {y}"),
            Self::Column { x } => write!(f, "column {x}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}

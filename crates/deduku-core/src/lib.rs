//! Core board model for the deduku sudoku engine.
//!
//! This crate provides the data model the solver crate builds on:
//!
//! - [`Digit`] and [`DigitSet`]: the nine digits and bitmask sets of them.
//! - [`Position`] and [`House`]: board coordinates and the 27 units, all
//!   derived by formula rather than hand-authored tables.
//! - [`Cell`] and [`Grid`]: packed cell state and the 81-cell board with
//!   cascading constraint propagation.
//!
//! # Examples
//!
//! ```
//! use deduku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.place_given(Position::new(0, 0), Digit::D5);
//! assert!(!grid.is_candidate(Position::new(8, 0), Digit::D5));
//! ```

pub use self::{cell::*, digit::*, digit_set::*, grid::*, house::*, position::*};

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

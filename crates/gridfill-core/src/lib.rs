//! Core data model for the gridfill sudoku solver.
//!
//! This crate holds the puzzle state and the rules that constrain it; the
//! search that actually fills a puzzle lives in `gridfill-solver`.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits 1-9 ([`Digit`])
//! - [`position`]: board coordinates and derived box indices ([`Position`])
//! - [`digit_set`]: bitmask sets of digits with ascending iteration
//!   ([`DigitSet`])
//! - [`grid`]: the 9x9 cell grid with its accessors, the per-cell candidate
//!   rule, and the given-cell validity check ([`Grid`])
//!
//! # Examples
//!
//! ```
//! use gridfill_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! // 5 is no longer available anywhere in row 4, column 4, or the center box
//! assert!(!grid.candidates(Position::new(4, 0)).contains(Digit::D5));
//! assert!(grid.is_valid());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, InvalidCellValue, ParseGridError},
    position::Position,
};

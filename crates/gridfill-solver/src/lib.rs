//! Backtracking search for the gridfill sudoku workspace.
//!
//! The solver is a plain depth-first search over the empty cells of a
//! [`Grid`](gridfill_core::Grid), in raster order, trying candidate digits in
//! ascending order and undoing each assignment that leads nowhere. No
//! human-style techniques, no heuristics: correctness and determinism over
//! speed.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use gridfill_core::Grid;
//! use gridfill_solver::solve;
//!
//! let mut grid = Grid::from_str(
//!     "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//!     ",
//! )
//! .unwrap();
//!
//! solve(&mut grid)?;
//! assert!(grid.is_solved());
//! # Ok::<(), gridfill_solver::SolveError>(())
//! ```

pub use self::{backtrack::solve, error::SolveError};

mod backtrack;
mod error;

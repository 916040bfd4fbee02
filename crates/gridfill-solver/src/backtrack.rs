//! Depth-first backtracking over the empty cells of a grid.

use gridfill_core::{Grid, Position};

use crate::SolveError;

/// Solves `grid` in place.
///
/// The givens are validated first: if any two of them conflict, the function
/// returns [`SolveError::InvalidGivens`] without starting the search, and
/// the grid is untouched. Otherwise empty cells are assigned in raster order
/// (column first, then row), trying candidate digits in ascending order,
/// until the grid is complete or every assignment has been exhausted.
///
/// On success every cell holds a digit and the grid satisfies the row,
/// column, and box uniqueness rule; given cells are never reassigned. On
/// [`SolveError::NoSolution`] every cell the search assigned has been
/// unwound back to empty.
///
/// A puzzle with several completions yields the first one in candidate
/// order, so repeated calls on the same input produce identical grids.
///
/// # Errors
///
/// - [`SolveError::InvalidGivens`] if the given cells already conflict.
/// - [`SolveError::NoSolution`] if the search space is exhausted without
///   completing the grid.
///
/// # Examples
///
/// ```
/// use gridfill_core::Grid;
/// use gridfill_solver::solve;
///
/// let mut grid = Grid::new();
/// solve(&mut grid)?;
/// assert!(grid.is_solved());
/// # Ok::<(), gridfill_solver::SolveError>(())
/// ```
pub fn solve(grid: &mut Grid) -> Result<(), SolveError> {
    if !grid.is_valid() {
        return Err(SolveError::InvalidGivens);
    }
    if solve_from(grid, next_empty(grid, 0)) {
        Ok(())
    } else {
        Err(SolveError::NoSolution)
    }
}

/// Returns the first empty position whose board index is `start` or later,
/// or `None` if the rest of the grid is filled.
fn next_empty(grid: &Grid, start: usize) -> Option<Position> {
    Position::ALL[start..]
        .iter()
        .copied()
        .find(|&pos| grid[pos].is_none())
}

/// Tries to complete the grid starting at `cursor`, the next empty cell to
/// assign.
///
/// A `None` cursor means the raster scan ran past the last cell and the grid
/// is complete. Returns `false` when no candidate at the cursor leads to a
/// completion; by then every assignment made at or below this frame has been
/// reverted, so the caller sees the grid exactly as it passed it in.
fn solve_from(grid: &mut Grid, cursor: Option<Position>) -> bool {
    let Some(pos) = cursor else {
        return true;
    };

    let next = next_empty(grid, usize::from(pos.index()) + 1);
    for digit in grid.candidates(pos) {
        grid.set(pos, Some(digit));
        if solve_from(grid, next) {
            return true;
        }
        grid.set(pos, None);
    }
    false
}

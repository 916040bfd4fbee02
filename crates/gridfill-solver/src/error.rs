//! Solver error types.

/// Failure modes of [`solve`](crate::solve).
///
/// Backtracking itself is not an error: "no candidate worked at this cell"
/// propagates as ordinary control flow inside the search. Only the two
/// top-level outcomes below ever reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// Two given cells in the same row, column, or box hold the same digit.
    /// Detected before the search starts; the grid is left untouched.
    #[display("the given cells conflict with each other")]
    InvalidGivens,
    /// The givens are conflict-free, but the grid has no completion. The
    /// search explored every candidate assignment and unwound them all.
    #[display("no solution exists for this puzzle")]
    NoSolution,
}

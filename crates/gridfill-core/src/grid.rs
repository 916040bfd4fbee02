//! The 9x9 puzzle grid.
//!
//! [`Grid`] is the single piece of mutable state in a solve: the caller
//! builds it from raw input, checks it with [`Grid::is_valid`], and hands it
//! to the solver, which fills it in place. The per-cell candidate rule
//! ([`Grid::candidates`]) is the one primitive both the validity check and
//! the search are built on.

use std::{fmt, ops::Index, str::FromStr};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 sudoku grid.
///
/// Cells hold `Option<Digit>`, with `None` for an empty cell, and are
/// addressed by [`Position`]. The external 0-means-blank convention only
/// exists at the [`Grid::from_values`] / [`Grid::to_values`] boundary.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use gridfill_core::{Digit, Grid, Position};
///
/// let grid = Grid::from_str(
///     "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
///     ",
/// )?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(2, 0)], None);
/// assert!(grid.is_valid());
/// # Ok::<(), gridfill_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

/// Error returned by [`Grid::from_values`] for a cell value greater than 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell value {value} at column {x}, row {y}")]
pub struct InvalidCellValue {
    /// Column (0-8) of the offending cell.
    pub x: u8,
    /// Row (0-8) of the offending cell.
    pub y: u8,
    /// The out-of-range value.
    pub value: u8,
}

/// Error returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character that is neither a digit, a blank marker, nor whitespace.
    #[display("unexpected character {ch:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from row-major cell values, with `0` meaning blank.
    ///
    /// This is the input boundary for callers that collect raw digits; the
    /// caller remains responsible for turning absent input into `0` before
    /// constructing the array.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellValue`] for the first value greater than 9.
    pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Self, InvalidCellValue> {
        let mut grid = Self::new();
        for (y, row) in (0..).zip(values) {
            for (x, &value) in (0..).zip(row) {
                if value == 0 {
                    continue;
                }
                let digit =
                    Digit::try_from_value(value).ok_or(InvalidCellValue { x, y, value })?;
                grid.set(Position::new(x, y), Some(digit));
            }
        }
        Ok(grid)
    }

    /// Returns the cell values as a row-major array, with `0` for blanks.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            values[usize::from(pos.y())][usize::from(pos.x())] =
                self[pos].map_or(0, Digit::value);
        }
        values
    }

    /// Returns the value of the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index() as usize]
    }

    /// Sets the cell at `pos` to `value`.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index() as usize] = value;
    }

    /// Returns the nine cells of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is 9 or greater.
    #[must_use]
    pub fn row(&self, y: u8) -> [Option<Digit>; 9] {
        let mut cells = [None; 9];
        for (x, cell) in (0..).zip(&mut cells) {
            *cell = self.get(Position::new(x, y));
        }
        cells
    }

    /// Returns the nine cells of column `x`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is 9 or greater.
    #[must_use]
    pub fn column(&self, x: u8) -> [Option<Digit>; 9] {
        let mut cells = [None; 9];
        for (y, cell) in (0..).zip(&mut cells) {
            *cell = self.get(Position::new(x, y));
        }
        cells
    }

    /// Returns the nine cells of box `box_index` in raster order.
    ///
    /// Use [`Position::box_index`] to find the box containing a given cell.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is 9 or greater.
    #[must_use]
    pub fn box_values(&self, box_index: u8) -> [Option<Digit>; 9] {
        let mut cells = [None; 9];
        for (i, cell) in (0..).zip(&mut cells) {
            *cell = self.get(Position::from_box(box_index, i));
        }
        cells
    }

    /// Computes the set of digits that could legally occupy `pos`.
    ///
    /// For an empty cell this is the true candidate domain: every digit not
    /// already used in the cell's row, column, or box. For a filled cell the
    /// result is either the singleton holding the cell's own digit (the
    /// assignment is locally consistent) or the empty set (some peer already
    /// holds that digit). A cell is never counted as its own peer.
    ///
    /// The grid is not modified, and repeated calls on an unmodified grid
    /// yield the same set.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfill_core::{Digit, DigitSet, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    ///
    /// // the filled cell sees itself as its only candidate
    /// assert_eq!(
    ///     grid.candidates(Position::new(0, 0)),
    ///     DigitSet::from_elem(Digit::D5)
    /// );
    /// // its row peers have lost 5
    /// assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
    /// ```
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        let mut set = match self.get(pos) {
            Some(current) => DigitSet::from_elem(current),
            None => DigitSet::FULL,
        };

        let row = self.row(pos.y());
        let column = self.column(pos.x());
        let box_cells = self.box_values(pos.box_index());
        for i in 0..9 {
            if i != usize::from(pos.x())
                && let Some(digit) = row[i]
            {
                set.remove(digit);
            }
            if i != usize::from(pos.y())
                && let Some(digit) = column[i]
            {
                set.remove(digit);
            }
            if i != usize::from(pos.box_cell_index())
                && let Some(digit) = box_cells[i]
            {
                set.remove(digit);
            }
        }
        set
    }

    /// Checks that no filled cell conflicts with another cell in its row,
    /// column, or box.
    ///
    /// Every filled cell must keep a non-empty candidate set; the first one
    /// that does not proves a duplicate and short-circuits the scan. Empty
    /// cells are ignored: a grid whose empty cells cannot be filled is still
    /// *valid*, it merely has no solution.
    ///
    /// The solver requires this to hold before the search starts and does
    /// not re-check it.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&pos| self[pos].is_none() || !self.candidates(pos).is_empty())
    }

    /// Returns `true` if every cell is filled and no cell conflicts with a
    /// peer, i.e. every row, column, and box contains each digit exactly
    /// once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some) && self.is_valid()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[usize::from(pos.index())]
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from 81 cells of text.
    ///
    /// Digits `1`-`9` are filled cells; `0`, `.`, and `_` are blanks; all
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(81);
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            cells.push(match ch {
                '0' | '.' | '_' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                '5' => Some(Digit::D5),
                '6' => Some(Digit::D6),
                '7' => Some(Digit::D7),
                '8' => Some(Digit::D8),
                '9' => Some(Digit::D9),
                _ => return Err(ParseGridError::UnexpectedCharacter { ch }),
            });
        }
        if cells.len() != 81 {
            return Err(ParseGridError::WrongCellCount { count: cells.len() });
        }

        let mut grid = Self::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            grid.set(pos, cell);
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    /// Formats the grid as nine rows of cells with `_` for blanks and a
    /// space between 3x3 groups. The output parses back via [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const WORDFEUD_QUARTER_BOARD: [&str; 8] = [
    "3l -- -- -- 3w -- -- 2l",
    "-- 2l -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "-- -- -- 3l -- -- -- 2w",
    "3w -- -- -- 2w -- 2l --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- 2l -- -- --",
    "2l -- -- 2w -- -- -- ss",
];

const SCRABBLE_QUARTER_BOARD: [&str; 8] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- 2w",
];

/// Scoring class of a square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Multiplier {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

use Multiplier::{DoubleLetter, DoubleWord, TripleLetter, TripleWord};

impl Multiplier {
    /// Factor applied to the value of a letter newly placed on this square.
    pub fn letter_factor(self) -> u32 {
        match self {
            DoubleLetter => 2,
            TripleLetter => 3,
            _ => 1,
        }
    }

    /// Factor applied to a word when a letter is newly placed on this square.
    pub fn word_factor(self) -> u32 {
        match self {
            DoubleWord => 2,
            TripleWord => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Multiplier::None => write!(f, "--"),
            DoubleLetter => write!(f, "2l"),
            TripleLetter => write!(f, "3l"),
            DoubleWord => write!(f, "2w"),
            TripleWord => write!(f, "3w"),
        }
    }
}

impl FromStr for Multiplier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Multiplier::None),
            "2l" => Ok(DoubleLetter),
            "3l" => Ok(TripleLetter),
            "2w" => Ok(DoubleWord),
            "3w" => Ok(TripleWord),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// Token for the start square without bonus.
const START: &str = "ss";

type Inner = Vec<Vec<Multiplier>>;

/// Board layout: a rectangular grid of (normal or bonus) squares, and the start square.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// On an empty board the first word must cover the start square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    squares: Inner,
    center: Option<(usize, usize)>,
}

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.squares
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::wordfeud()
    }
}

impl Grid {
    /// Create a grid of `rows` x `cols` squares with no bonus and no start square.
    pub fn empty(rows: usize, cols: usize) -> Grid {
        Grid {
            squares: vec![vec![Multiplier::None; cols]; rows],
            center: None,
        }
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically. The quarter board includes the middle row and column.
    /// ## Errors
    /// If `qb` is empty, a row has the wrong length, or a square can not be parsed.
    pub fn expand_quarter_board<S: AsRef<str>>(qb: &[S]) -> Result<Grid, Error> {
        if qb.is_empty() {
            return Err(Error::InvalidRowCount(0, 1));
        }
        let q = qb.len();
        let n = 2 * q - 1;
        let mut grid = Grid::empty(n, n);
        for (i, row) in qb.iter().enumerate() {
            let row = row.as_ref().split(' ').collect::<Vec<&str>>();
            if row.len() != q {
                return Err(Error::InvalidRowLength(qb[i].as_ref().to_string(), row.len(), q));
            }
            for (j, &token) in row.iter().enumerate() {
                let val = if token == START {
                    grid.center = Some((i, j));
                    Multiplier::None
                } else {
                    token.parse()?
                };
                grid.squares[i][j] = val;
                grid.squares[n - i - 1][j] = val;
                grid.squares[i][n - j - 1] = val;
                grid.squares[n - i - 1][n - j - 1] = val;
            }
        }
        Ok(grid)
    }

    /// The 15x15 wordfeud grid. The start square at (7,7) has no bonus.
    /// ## Example
    /// ```
    /// # use scrabble_solver::Grid;
    /// let grid = Grid::wordfeud();
    /// assert_eq!(grid.center(), Some((7, 7)));
    /// println!("{}", grid);
    /// ```
    pub fn wordfeud() -> Grid {
        // the builtin layout always parses
        Grid::expand_quarter_board(&WORDFEUD_QUARTER_BOARD).unwrap_or_else(|_| Grid::empty(0, 0))
    }

    /// The 15x15 scrabble grid. The start square at (7,7) is a double word square.
    pub fn scrabble() -> Grid {
        Grid::expand_quarter_board(&SCRABBLE_QUARTER_BOARD)
            .map(|grid| grid.with_center(7, 7))
            .unwrap_or_else(|_| Grid::empty(0, 0))
    }

    /// Set the start square.
    pub fn with_center(mut self, row: usize, col: usize) -> Grid {
        self.center = Some((row, col));
        self
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.squares.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.squares.first().map_or(0, Vec::len)
    }

    /// The start square, if any.
    pub fn center(&self) -> Option<(usize, usize)> {
        self.center
    }

    /// Multiplier at `row`, `col`, or None outside the grid.
    pub fn multiplier_at(&self, row: usize, col: usize) -> Option<Multiplier> {
        self.squares.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Check that the grid is a non-empty rectangle and the start square lies inside it.
    /// ## Errors
    /// `InvalidRowCount` for an empty grid, `InvalidRowLength` for a ragged grid,
    /// `CenterOutOfBounds` for a start square outside the grid.
    pub fn validate(&self) -> Result<(), Error> {
        let cols = self.cols();
        if self.rows() == 0 || cols == 0 {
            return Err(Error::InvalidRowCount(self.rows(), self.rows().max(1)));
        }
        for row in &self.squares {
            if row.len() != cols {
                let repr = row.iter().map(Multiplier::to_string).collect::<Vec<_>>();
                return Err(Error::InvalidRowLength(repr.join(" "), row.len(), cols));
            }
        }
        if let Some((row, col)) = self.center {
            if row >= self.rows() || col >= cols {
                return Err(Error::CenterOutOfBounds { row, col });
            }
        }
        Ok(())
    }

    /// Get grid squares as a list of strings, one per row.
    /// The start square shows as "ss" when it has no bonus.
    pub fn to_strings(&self) -> Vec<String> {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, square)| match square {
                        Multiplier::None if self.center == Some((i, j)) => String::from(START),
                        _ => square.to_string(),
                    })
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Each row consists of squares joined by spaces, all rows must have the same length.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or squares can not be parsed as a `Multiplier`.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Grid, Multiplier, Error};
    /// let grid = Grid::from_strings(&[
    ///     "3w -- 2l",
    ///     "-- ss --",
    ///     "2l -- 3w",
    /// ])?;
    /// assert_eq!(grid.rows(), 3);
    /// assert_eq!(grid.center(), Some((1, 1)));
    /// assert_eq!(grid.multiplier_at(2, 2), Some(Multiplier::TripleWord));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        let first = grid.first().ok_or(Error::InvalidRowCount(0, 1))?;
        let cols = first.as_ref().split(' ').count();
        let mut result = Grid::empty(grid.len(), cols);
        for (i, row) in grid.iter().enumerate() {
            let tokens: Vec<&str> = row.as_ref().split(' ').collect();
            if tokens.len() != cols {
                return Err(Error::InvalidRowLength(
                    row.as_ref().to_string(),
                    tokens.len(),
                    cols,
                ));
            }
            for (j, &token) in tokens.iter().enumerate() {
                result.squares[i][j] = if token == START {
                    result.center = Some((i, j));
                    Multiplier::None
                } else {
                    token.parse()?
                };
            }
        }
        Ok(result)
    }
}

use crate::grid::{Grid, Multiplier};
use crate::pattern::Direction;
use crate::solver::Move;
use crate::trie::normalize;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board: its position, the letter placed on it (if any),
/// and its multiplier.
///
/// A blank tile is stored with the letter it was resolved to and `is_blank` set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub letter: Option<char>,
    pub is_blank: bool,
    pub multiplier: Multiplier,
}

impl Cell {
    /// An empty cell.
    pub fn empty(row: usize, col: usize, multiplier: Multiplier) -> Cell {
        Cell {
            row,
            col,
            letter: None,
            is_blank: false,
            multiplier,
        }
    }

    /// This cell with `letter` placed on it.
    pub fn with_letter(self, letter: char, is_blank: bool) -> Cell {
        Cell {
            letter: Some(normalize(letter)),
            is_blank,
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Character for the text form: `.` when empty, uppercase for a blank.
    fn symbol(&self) -> char {
        match self.letter {
            None => '.',
            Some(letter) if self.is_blank => letter.to_uppercase().next().unwrap_or(letter),
            Some(letter) => letter,
        }
    }
}

/// The state of a board: a rectangular grid of cells.
///
/// The board is read-only while solving. With the `serde` feature it serializes as
/// a list of rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

/// Display the board state as rows of squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Board {
    /// Create an empty board with the squares of `grid`.
    ///
    /// ## Examples
    ///```
    /// use scrabble_solver::{Board, Grid};
    ///
    /// let board = Board::new(&Grid::wordfeud());
    /// assert!(board.is_empty());
    /// assert_eq!(board.rows(), 15);
    ///```
    pub fn new(grid: &Grid) -> Board {
        let cells = grid
            .iter()
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .map(|(col, &multiplier)| Cell::empty(row, col, multiplier))
                    .collect()
            })
            .collect();
        Board { cells }
    }

    /// Parse board state from a list of strings, one per row of `grid`.
    /// A `.` or space is an empty square, a lowercase letter a tile,
    /// and an uppercase letter a blank used as that letter.
    /// ## Errors
    /// If the list of strings does not have the dimensions of `grid`,
    /// or contains a character that is not a letter.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Grid};
    /// let grid = Grid::empty(3, 4);
    /// let board = Board::from_strings(&grid, &["....", ".Ab.", "...."]).unwrap();
    /// assert_eq!(board.letter_at(1, 1), Some('a'));
    /// assert!(board.cell_at(1, 1).unwrap().is_blank);
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &Grid, rows: &[S]) -> Result<Board, Error> {
        if rows.len() != grid.rows() {
            return Err(Error::InvalidRowCount(rows.len(), grid.rows()));
        }
        let mut board = Board::new(grid);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != grid.cols() {
                return Err(Error::InvalidRowLength(String::from(row), len, grid.cols()));
            }
            for (j, ch) in row.chars().enumerate() {
                let cell = &mut board.cells[i][j];
                match ch {
                    '.' | ' ' => {}
                    ch if ch.is_alphabetic() => *cell = cell.with_letter(ch, ch.is_uppercase()),
                    ch => return Err(Error::InvalidTile(ch)),
                }
            }
        }
        Ok(board)
    }

    /// Board state as strings, in the format read by [`from_strings`](Board::from_strings).
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Get the cell at `row`, `col`, or None if outside the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Return the letter at `row`, `col`, or None if empty or outside the board.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.cell_at(row, col).and_then(|cell| cell.letter)
    }

    /// Check if the cell at `row`, `col` is occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.letter_at(row, col).is_some()
    }

    /// Multiplier of the cell at `row`, `col`, or None if outside the board.
    pub fn multiplier_at(&self, row: usize, col: usize) -> Option<Multiplier> {
        self.cell_at(row, col).map(|cell| cell.multiplier)
    }

    /// Returns true if no tile has been played on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_empty)
    }

    /// Iterate over all cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Iterate over the cells of line `index` in `direction`:
    /// a row for `Horizontal`, a column for `Vertical`.
    pub fn line(&self, direction: Direction, index: usize) -> Vec<&Cell> {
        match direction {
            Direction::Horizontal => self
                .cells
                .get(index)
                .map_or(Vec::new(), |row| row.iter().collect()),
            Direction::Vertical => self.cells.iter().filter_map(|row| row.get(index)).collect(),
        }
    }

    /// Number of lines in `direction`.
    pub fn line_count(&self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.rows(),
            Direction::Vertical => self.cols(),
        }
    }

    fn has_occupied_neighbour(&self, row: usize, col: usize) -> bool {
        (row > 0 && self.is_occupied(row - 1, col))
            || self.is_occupied(row + 1, col)
            || (col > 0 && self.is_occupied(row, col - 1))
            || self.is_occupied(row, col + 1)
    }

    /// Returns the cells where a move can connect to the board: the empty cells next to
    /// an occupied cell, or `center` if the board is empty.
    /// ## Errors
    /// `MissingCenter` if the board is empty and `center` is None,
    /// `CenterOutOfBounds` if `center` is outside the board.
    pub fn anchors(&self, center: Option<(usize, usize)>) -> Result<Vec<(usize, usize)>, Error> {
        if self.is_empty() {
            let (row, col) = center.ok_or(Error::MissingCenter)?;
            if self.cell_at(row, col).is_none() {
                return Err(Error::CenterOutOfBounds { row, col });
            }
            return Ok(vec![(row, col)]);
        }
        Ok(self
            .iter()
            .filter(|cell| cell.is_empty() && self.has_occupied_neighbour(cell.row, cell.col))
            .map(|cell| (cell.row, cell.col))
            .collect())
    }

    /// Returns the first and last index along `direction` of the run of occupied cells
    /// that would contain (`row`, `col`) if a letter were placed there.
    pub(crate) fn run_bounds(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> (usize, usize) {
        let (pos, line) = match direction {
            Direction::Horizontal => (col, row),
            Direction::Vertical => (row, col),
        };
        let at = |i: usize| match direction {
            Direction::Horizontal => self.is_occupied(line, i),
            Direction::Vertical => self.is_occupied(i, line),
        };
        let mut start = pos;
        while start > 0 && at(start - 1) {
            start -= 1;
        }
        let mut end = pos;
        while at(end + 1) {
            end += 1;
        }
        (start, end)
    }

    /// Check that the board is a non-empty rectangle and each cell knows its own position.
    /// Letters must be lowercase, and blank flags are only set on occupied cells.
    /// ## Errors
    /// `InvalidBoard` describing the first inconsistency.
    pub fn validate(&self) -> Result<(), Error> {
        let cols = self.cols();
        if self.rows() == 0 || cols == 0 {
            return Err(Error::InvalidBoard(String::from("board has no cells")));
        }
        for (i, row) in self.cells.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidBoard(format!(
                    "row {} has {} cells, expect {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            for (j, cell) in row.iter().enumerate() {
                if (cell.row, cell.col) != (i, j) {
                    return Err(Error::InvalidBoard(format!(
                        "cell at row={}, col={} claims row={}, col={}",
                        i, j, cell.row, cell.col
                    )));
                }
                match cell.letter {
                    None if cell.is_blank => {
                        return Err(Error::InvalidBoard(format!(
                            "empty cell at row={}, col={} is marked blank",
                            i, j
                        )));
                    }
                    Some(letter) if letter != normalize(letter) => {
                        return Err(Error::InvalidBoard(format!(
                            "letter '{}' at row={}, col={} is not lowercase",
                            letter, i, j
                        )));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Write the cells of `mv` onto the board.
    /// Cells that already hold the same letter (ignoring case) are kept.
    /// ## Errors
    /// - `CellOutOfBounds` if a cell of the move is outside the board.
    /// - `TileReplaceError` if a cell holds a different letter.
    ///
    /// The board is not modified when an error is returned.
    pub fn apply(&mut self, mv: &Move) -> Result<(), Error> {
        for placed in &mv.cells {
            let (row, col) = (placed.row, placed.col);
            let cell = self
                .cell_at(row, col)
                .ok_or(Error::CellOutOfBounds { row, col })?;
            if let Some(letter) = cell.letter {
                if normalize(letter) != normalize(placed.letter) {
                    return Err(Error::TileReplaceError { row, col });
                }
            }
        }
        for placed in &mv.cells {
            let cell = &mut self.cells[placed.row][placed.col];
            if cell.is_empty() {
                *cell = cell.with_letter(placed.letter, placed.is_blank);
            }
        }
        Ok(())
    }
}

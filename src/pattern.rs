use crate::board::{Board, Cell};
use crate::trie::normalize;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a line on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, top to bottom.
    Vertical,
}

impl Direction {
    /// The crossing direction.
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Position of the `k`'th cell of the line starting at `row`, `col`.
    pub fn advance(self, row: usize, col: usize, k: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + k),
            Direction::Vertical => (row + k, col),
        }
    }
}

/// Canonical structural identity of a pattern: the direction and the
/// (row, col, letter, is_blank) assignment of its cells, sorted by position.
///
/// Two patterns with equal keys are the same move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey {
    direction: Direction,
    cells: Vec<(usize, usize, char, bool)>,
}

/// A candidate move: a contiguous line of cells.
///
/// A pattern skeleton has empty cells that still have to be filled from the rack.
/// A filled pattern has a letter in every cell, and remembers which cells are
/// newly placed and which perpendicular words the new letters create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    direction: Direction,
    cells: Vec<Cell>,
    placed: Vec<bool>,
    crosses: Vec<Pattern>,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (row, col) = self.start();
        let dir = match self.direction {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        };
        let word: String = self
            .cells
            .iter()
            .map(|cell| match cell.letter {
                None => '.',
                Some(letter) if cell.is_blank => letter.to_uppercase().next().unwrap_or(letter),
                Some(letter) => letter,
            })
            .collect();
        write!(f, "{} {} {} {}", row, col, dir, word)
    }
}

impl Pattern {
    /// Create a pattern skeleton from the board cells of a line.
    pub(crate) fn skeleton(direction: Direction, cells: Vec<Cell>) -> Pattern {
        let placed = vec![false; cells.len()];
        Pattern {
            direction,
            cells,
            placed,
            crosses: Vec::new(),
        }
    }

    pub(crate) fn filled(
        direction: Direction,
        cells: Vec<Cell>,
        placed: Vec<bool>,
        crosses: Vec<Pattern>,
    ) -> Pattern {
        Pattern {
            direction,
            cells,
            placed,
            crosses,
        }
    }

    /// Build the filled pattern for `word` written at `row`, `col` in `direction`.
    /// Uppercase letters in `word` are blanks. The perpendicular words created by
    /// the new letters are included. Words are not checked against a dictionary.
    /// ## Errors
    /// - `TilePlacementError` if the word does not fit on the board.
    /// - `TileReplaceError` if a letter differs from the letter already on the board.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Direction, Grid, Pattern, Error};
    /// let board = Board::new(&Grid::wordfeud());
    /// let pattern = Pattern::place(&board, 7, 7, Direction::Horizontal, "rUst")?;
    /// assert_eq!(pattern.word(), "rust");
    /// assert_eq!(pattern.placed_count(), 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn place(
        board: &Board,
        row: usize,
        col: usize,
        direction: Direction,
        word: &str,
    ) -> Result<Pattern, Error> {
        let len = word.chars().count();
        let (last_row, last_col) = direction.advance(row, col, len.saturating_sub(1));
        if len == 0 || last_row >= board.rows() || last_col >= board.cols() {
            return Err(Error::TilePlacementError {
                row,
                col,
                horizontal: direction == Direction::Horizontal,
                len,
            });
        }
        let mut cells = Vec::with_capacity(len);
        let mut placed = Vec::with_capacity(len);
        for (k, ch) in word.chars().enumerate() {
            let (r, c) = direction.advance(row, col, k);
            let cell = *board
                .cell_at(r, c)
                .ok_or(Error::CellOutOfBounds { row: r, col: c })?;
            match cell.letter {
                Some(letter) if letter != normalize(ch) => {
                    return Err(Error::TileReplaceError { row: r, col: c });
                }
                Some(_) => {
                    cells.push(cell);
                    placed.push(false);
                }
                None => {
                    cells.push(cell.with_letter(ch, ch.is_uppercase()));
                    placed.push(true);
                }
            }
        }
        let crosses = cross_patterns(board, direction, &cells, &placed);
        Ok(Pattern::filled(direction, cells, placed, crosses))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Position of the first cell.
    pub fn start(&self) -> (usize, usize) {
        self.cells.first().map_or((0, 0), |cell| (cell.row, cell.col))
    }

    /// Iterate over (cell, newly placed) pairs.
    pub fn slots(&self) -> impl Iterator<Item = (&Cell, bool)> {
        self.cells.iter().zip(self.placed.iter().copied())
    }

    /// The cells that are placed by this move.
    pub fn placed_cells(&self) -> impl Iterator<Item = &Cell> {
        self.slots().filter(|(_, placed)| *placed).map(|(cell, _)| cell)
    }

    /// Number of newly placed tiles.
    pub fn placed_count(&self) -> usize {
        self.placed.iter().filter(|&&placed| placed).count()
    }

    /// The cells that reuse a letter already on the board.
    pub fn collisions(&self) -> Vec<&Cell> {
        self.slots()
            .filter(|(cell, placed)| !placed && !cell.is_empty())
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of empty cells still to be filled.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Returns true if every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// The perpendicular words created by the new letters.
    pub fn crosses(&self) -> &[Pattern] {
        &self.crosses
    }

    /// The letters of the pattern as a string. Empty cells are skipped.
    pub fn word(&self) -> String {
        self.cells.iter().filter_map(|cell| cell.letter).collect()
    }

    /// Canonical structural key, used to detect duplicate moves.
    pub fn key(&self) -> PatternKey {
        let mut cells: Vec<_> = self
            .cells
            .iter()
            .filter_map(|cell| {
                cell.letter.map(|letter| (cell.row, cell.col, letter, cell.is_blank))
            })
            .collect();
        cells.sort_unstable();
        PatternKey {
            direction: self.direction,
            cells,
        }
    }
}

/// The perpendicular patterns through the newly placed cells of a line,
/// for every run of at least 2 letters.
pub(crate) fn cross_patterns(
    board: &Board,
    direction: Direction,
    cells: &[Cell],
    placed: &[bool],
) -> Vec<Pattern> {
    let cross = direction.perpendicular();
    cells
        .iter()
        .zip(placed)
        .filter(|(_, &placed)| placed)
        .filter_map(|(new, _)| cross_pattern(board, cross, new))
        .collect()
}

fn cross_pattern(board: &Board, direction: Direction, new: &Cell) -> Option<Pattern> {
    let (start, end) = board.run_bounds(new.row, new.col, direction);
    if start == end {
        return None;
    }
    let mut cells = Vec::with_capacity(end - start + 1);
    let mut placed = Vec::with_capacity(end - start + 1);
    for i in start..=end {
        let (row, col) = match direction {
            Direction::Horizontal => (new.row, i),
            Direction::Vertical => (i, new.col),
        };
        if (row, col) == (new.row, new.col) {
            cells.push(*new);
            placed.push(true);
        } else {
            cells.push(*board.cell_at(row, col)?);
            placed.push(false);
        }
    }
    Some(Pattern::filled(direction, cells, placed, Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn test_board() -> Board {
        let grid = Grid::empty(5, 5);
        Board::from_strings(&grid, &[".....", ".cat.", ".....", ".....", "....."]).unwrap()
    }

    #[test]
    fn test_place() -> Result<(), Error> {
        let board = test_board();
        let pattern = Pattern::place(&board, 1, 1, Direction::Horizontal, "cats")?;
        assert_eq!(pattern.word(), "cats");
        assert_eq!(pattern.placed_count(), 1);
        assert_eq!(pattern.collisions().len(), 3);
        assert!(pattern.crosses().is_empty());
        assert!(pattern.is_filled());
        Ok(())
    }

    #[test]
    fn test_place_crosses() -> Result<(), Error> {
        let board = test_board();
        // "aT" below "ca" forms the vertical words "ca" and "at"
        let pattern = Pattern::place(&board, 2, 1, Direction::Horizontal, "aT")?;
        assert_eq!(pattern.placed_count(), 2);
        let crosses: Vec<String> = pattern.crosses().iter().map(Pattern::word).collect();
        assert_eq!(crosses, vec!["ca", "at"]);
        let cross = &pattern.crosses()[1];
        assert_eq!(cross.direction(), Direction::Vertical);
        assert_eq!(cross.start(), (1, 2));
        assert_eq!(cross.placed_count(), 1);
        assert!(cross.cells()[1].is_blank);
        Ok(())
    }

    #[test]
    fn test_place_errors() {
        let board = test_board();
        assert!(matches!(
            Pattern::place(&board, 1, 3, Direction::Horizontal, "tea"),
            Err(Error::TilePlacementError { len: 3, .. })
        ));
        assert!(matches!(
            Pattern::place(&board, 0, 2, Direction::Vertical, "ox"),
            Err(Error::TileReplaceError { row: 1, col: 2 })
        ));
    }

    #[test]
    fn test_key() -> Result<(), Error> {
        let board = test_board();
        let a = Pattern::place(&board, 0, 1, Direction::Vertical, "ac")?;
        let b = Pattern::place(&board, 0, 1, Direction::Vertical, "ac")?;
        let c = Pattern::place(&board, 0, 1, Direction::Vertical, "Ac")?;
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        Ok(())
    }

    #[test]
    fn test_skeleton() {
        let board = test_board();
        let cells: Vec<Cell> = board.line(Direction::Horizontal, 1).into_iter().copied().collect();
        let skeleton = Pattern::skeleton(Direction::Horizontal, cells);
        assert_eq!(skeleton.word(), "cat");
        assert_eq!(skeleton.empty_count(), 2);
        assert!(!skeleton.is_filled());
        assert_eq!(skeleton.to_string(), "1 0 H .cat.");
    }
}

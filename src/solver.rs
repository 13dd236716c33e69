use crate::board::Board;
use crate::config::Config;
use crate::filler::PatternsFiller;
use crate::generator::PatternsGenerator;
use crate::pattern::{Pattern, PatternKey};
use crate::scores::ScoresCalculator;
use crate::tiles::{Rack, Tile};
use crate::trie::Trie;
use crate::Error;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::convert::TryFrom;

/// A cell of a move: the position and the letter. Blanks have `is_blank` set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlacedCell {
    pub row: usize,
    pub col: usize,
    pub letter: char,
    pub is_blank: bool,
}

/// The result of a solve: the cells of the main word (both new and reused),
/// the tiles taken from the rack, the points, the number of cells reused
/// from the board and the number of words formed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Move {
    /// Index of the move among the unique candidates of the solve.
    pub id: usize,
    pub cells: Vec<PlacedCell>,
    /// The rack tiles used, in board order. A blank stays a blank here.
    pub tiles: Vec<Tile>,
    pub points: u32,
    pub number_of_collisions: usize,
    /// The main word plus one for each cross word.
    pub number_of_words: usize,
}

impl Move {
    fn new(id: usize, pattern: &Pattern, points: u32) -> Move {
        let cells = pattern
            .cells()
            .iter()
            .filter_map(|cell| {
                cell.letter.map(|letter| PlacedCell {
                    row: cell.row,
                    col: cell.col,
                    letter,
                    is_blank: cell.is_blank,
                })
            })
            .collect();
        let tiles = pattern
            .placed_cells()
            .filter_map(|cell| match cell.letter {
                Some(_) if cell.is_blank => Some(Tile::blank()),
                Some(letter) => Some(Tile::letter(letter)),
                None => None,
            })
            .collect();
        Move {
            id,
            cells,
            tiles,
            points,
            number_of_collisions: pattern.collisions().len(),
            number_of_words: 1 + pattern.crosses().len(),
        }
    }

    /// The main word of the move.
    pub fn word(&self) -> String {
        self.cells.iter().map(|cell| cell.letter).collect()
    }

    /// Number of tiles taken from the rack.
    pub fn tiles_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn blanks_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_blank()).count()
    }

    pub fn words_count(&self) -> usize {
        self.number_of_words
    }
}

/// Finds the best scoring move for a board and a rack.
///
/// The solver holds no state between calls: board and rack are passed to each
/// [`solve`](Solver::solve), the config and the dictionary are borrowed.
pub struct Solver<'a> {
    config: &'a Config,
    trie: &'a Trie,
}

impl<'a> Solver<'a> {
    pub fn new(config: &'a Config, trie: &'a Trie) -> Solver<'a> {
        Solver { config, trie }
    }

    /// Check everything that must hold before a search can start.
    fn check(&self, board: &Board) -> Result<(), Error> {
        self.config.validate()?;
        board.validate()?;
        let grid = self.config.grid();
        if (board.rows(), board.cols()) != (grid.rows(), grid.cols()) {
            return Err(Error::BoardSizeMismatch {
                rows: board.rows(),
                cols: board.cols(),
                expect_rows: grid.rows(),
                expect_cols: grid.cols(),
            });
        }
        if self.trie.is_empty() {
            return Err(Error::MissingDictionary);
        }
        Ok(())
    }

    /// Return the best move for `tiles` on `board`: a vector with one move,
    /// or an empty vector if the rack is empty or no move is possible.
    ///
    /// Among moves with the same points the winner is the one with the
    /// smallest word, then the smallest first cell (row, col), then horizontal
    /// before vertical, then the smallest [`PatternKey`].
    /// ## Errors
    /// - A configuration error if the layout is invalid, the board does not
    ///   match the layout, or the board is empty and there is no start cell.
    /// - `MissingDictionary` if the trie holds no words.
    /// - `RackTooLarge` if there are more than `MAX_RACK` tiles.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Config, Language, Solver, Tile, Trie, Error};
    /// let config = Config::scrabble(Language::EN);
    /// let trie = Trie::from_words(&["cat", "at"])?;
    /// let board = Board::new(config.grid());
    /// let rack = [Tile::letter('t'), Tile::letter('a'), Tile::letter('c')];
    /// let moves = Solver::new(&config, &trie).solve(&board, &rack)?;
    /// assert_eq!(moves[0].word(), "cat");
    /// assert_eq!(moves[0].points, 10);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn solve(&self, board: &Board, tiles: &[Tile]) -> Result<Vec<Move>, Error> {
        self.check(board)?;
        let rack = Rack::try_from(tiles)?;
        if rack.is_empty() {
            return Ok(Vec::new());
        }
        let skeletons = PatternsGenerator::new(self.config).generate(board, rack.len())?;
        let filler = PatternsFiller::new(self.trie);
        let fill = |skeleton: &Pattern| filler.fill(board, skeleton, &rack);
        #[cfg(feature = "rayon")]
        let filled = skeletons
            .par_iter()
            .map(fill)
            .collect::<Result<Vec<_>, Error>>()?;
        #[cfg(not(feature = "rayon"))]
        let filled = skeletons
            .iter()
            .map(fill)
            .collect::<Result<Vec<_>, Error>>()?;
        let candidates: Vec<Pattern> = filled.into_iter().flatten().collect();
        let count = candidates.len();
        let candidates = unique(candidates);
        debug!(
            "rack '{}': {} skeletons, {} candidates, {} unique",
            rack,
            skeletons.len(),
            count,
            candidates.len()
        );

        let calculator = ScoresCalculator::new(self.config);
        let best = candidates
            .iter()
            .enumerate()
            .map(|(id, pattern)| (id, pattern, calculator.calculate(pattern)))
            .min_by_key(|&(_, pattern, points)| {
                (
                    Reverse(points),
                    pattern.word(),
                    pattern.start(),
                    pattern.direction(),
                    pattern.key(),
                )
            });
        match best {
            Some((id, pattern, points)) => {
                debug!("best move: {} for {} points", pattern, points);
                Ok(vec![Move::new(id, pattern, points)])
            }
            None => {
                debug!("no move found");
                Ok(Vec::new())
            }
        }
    }
}

/// Drop patterns with the same structural key, keeping the first.
pub(crate) fn unique(patterns: Vec<Pattern>) -> Vec<Pattern> {
    let mut seen: HashSet<PatternKey> = HashSet::with_capacity(patterns.len());
    patterns
        .into_iter()
        .filter(|pattern| seen.insert(pattern.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::pattern::Direction;
    use crate::tilesets::Language;

    fn tiles(letters: &str) -> Vec<Tile> {
        letters
            .chars()
            .map(|ch| Tile::try_from(ch).unwrap())
            .collect()
    }

    fn small_config() -> Config {
        Config::wordfeud(Language::EN).with_grid(Grid::empty(5, 5).with_center(2, 2))
    }

    const WORDS: &[&str] = &[
        "cat", "cats", "scat", "act", "acts", "tact", "at", "as", "ta", "sat", "tas", "st",
    ];

    fn small_board(config: &Config) -> Board {
        Board::from_strings(config.grid(), &[".....", ".....", ".cat.", ".....", "....."]).unwrap()
    }

    /// The word through `row`, `col` in `direction` on a board.
    fn run(board: &Board, row: usize, col: usize, direction: Direction) -> String {
        let (start, end) = board.run_bounds(row, col, direction);
        (start..=end)
            .filter_map(|i| match direction {
                Direction::Horizontal => board.letter_at(row, i),
                Direction::Vertical => board.letter_at(i, col),
            })
            .collect()
    }

    #[test]
    fn test_empty_rack() -> Result<(), Error> {
        let config = small_config();
        let trie = Trie::from_words(WORDS)?;
        let solver = Solver::new(&config, &trie);
        assert!(solver.solve(&small_board(&config), &[])?.is_empty());
        assert!(solver.solve(&Board::new(config.grid()), &[])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_no_move() -> Result<(), Error> {
        let config = small_config();
        let trie = Trie::from_words(WORDS)?;
        let moves = Solver::new(&config, &trie).solve(&small_board(&config), &tiles("xyz"))?;
        assert!(moves.is_empty());
        Ok(())
    }

    #[test]
    fn test_first_move() -> Result<(), Error> {
        let config = Config::scrabble(Language::EN);
        let trie = Trie::from_words(&["cat", "dog", "at"])?;
        let board = Board::new(config.grid());
        let moves = Solver::new(&config, &trie).solve(&board, &tiles("cat"))?;
        assert_eq!(moves.len(), 1);
        let best = &moves[0];
        assert_eq!(best.word(), "cat");
        assert_eq!(best.points, (3 + 1 + 1) * 2);
        assert_eq!(best.number_of_collisions, 0);
        assert!(best.cells.iter().any(|cell| (cell.row, cell.col) == (7, 7)));
        // all placements through the center score the same: the smallest first cell wins
        let cells: Vec<(usize, usize)> = best.cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(cells, vec![(5, 7), (6, 7), (7, 7)]);
        Ok(())
    }

    #[test]
    fn test_blank() -> Result<(), Error> {
        let config = Config::scrabble(Language::EN);
        let trie = Trie::from_words(&["cat", "dog", "at"])?;
        let board = Board::new(config.grid());
        let moves = Solver::new(&config, &trie).solve(&board, &tiles("ca*"))?;
        let best = &moves[0];
        assert_eq!(best.word(), "cat");
        assert_eq!(best.points, (3 + 1) * 2);
        let blanks: Vec<char> = best
            .cells
            .iter()
            .filter(|c| c.is_blank)
            .map(|c| c.letter)
            .collect();
        assert_eq!(blanks, vec!['t']);
        assert_eq!(best.tiles_count(), 3);
        assert_eq!(best.blanks_count(), 1);
        assert_eq!(best.words_count(), 1);
        assert!(best.tiles.contains(&Tile::blank()));
        Ok(())
    }

    #[test]
    fn test_bonus() -> Result<(), Error> {
        let trie = Trie::from_words(&["cat", "dog", "at"])?;
        let config = Config::scrabble(Language::EN).with_rack_size(3);
        let board = Board::new(config.grid());
        let moves = Solver::new(&config, &trie).solve(&board, &tiles("cat"))?;
        assert_eq!(moves[0].points, 10 + 50);

        let config = Config::scrabble(Language::EN);
        let moves = Solver::new(&config, &trie).solve(&board, &tiles("catd"))?;
        assert_eq!(moves[0].points, 10);
        Ok(())
    }

    #[test]
    fn test_determinism() -> Result<(), Error> {
        let config = small_config();
        let trie = Trie::from_words(WORDS)?;
        let board = small_board(&config);
        let solver = Solver::new(&config, &trie);
        let first = solver.solve(&board, &tiles("sta*"))?;
        assert_eq!(first.len(), 1);
        for _ in 0..5 {
            assert_eq!(solver.solve(&board, &tiles("sta*"))?, first);
        }
        Ok(())
    }

    #[test]
    fn test_legal_and_non_destructive() -> Result<(), Error> {
        let config = small_config();
        let trie = Trie::from_words(WORDS)?;
        let board = small_board(&config);
        let solver = Solver::new(&config, &trie);
        for rack in &["s", "st", "ta", "sat", "a*", "tsac"] {
            let moves = solver.solve(&board, &tiles(rack))?;
            assert_eq!(moves.len(), 1, "rack '{}' should have a move", rack);
            let best = &moves[0];
            assert!(trie.contains(&best.word()), "'{}' is not a word", best.word());
            let mut collisions = 0;
            for cell in &best.cells {
                if let Some(letter) = board.letter_at(cell.row, cell.col) {
                    assert_eq!(letter, cell.letter);
                    collisions += 1;
                }
            }
            assert_eq!(collisions, best.number_of_collisions);
            assert!(collisions < best.cells.len());

            let mut after = board.clone();
            after.apply(best)?;
            let first = best.cells[0];
            let last = best.cells[best.cells.len() - 1];
            let direction = if first.row == last.row {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            assert_eq!(run(&after, first.row, first.col, direction), best.word());
            for cell in best.cells.iter().filter(|c| !board.is_occupied(c.row, c.col)) {
                let cross = run(&after, cell.row, cell.col, direction.perpendicular());
                assert!(
                    cross.chars().count() < 2 || trie.contains(&cross),
                    "rack '{}': cross word '{}' is not a word",
                    rack,
                    cross
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_unique() -> Result<(), Error> {
        let config = small_config();
        let board = small_board(&config);
        let a = Pattern::place(&board, 2, 1, Direction::Horizontal, "cats")?;
        let b = Pattern::place(&board, 2, 0, Direction::Horizontal, "scat")?;
        let c = Pattern::place(&board, 2, 1, Direction::Horizontal, "catS")?;
        let patterns = unique(vec![a.clone(), b.clone(), a.clone(), c.clone(), b.clone()]);
        assert_eq!(patterns, vec![a, b, c]);
        Ok(())
    }

    #[test]
    fn test_tie_break() -> Result<(), Error> {
        let config = Config::wordfeud(Language::EN).with_grid(Grid::empty(3, 3).with_center(1, 1));
        let trie = Trie::from_words(&["ab", "ba"])?;
        let board = Board::new(config.grid());
        let solver = Solver::new(&config, &trie);
        // "ab" and "ba" score 5 in every position
        let moves = solver.solve(&board, &tiles("ba"))?;
        let best = &moves[0];
        assert_eq!(best.points, 5);
        assert_eq!(best.word(), "ab");
        assert_eq!((best.cells[0].row, best.cells[0].col), (0, 1));
        assert_eq!(best.cells[1].col, 1);
        for _ in 0..5 {
            assert_eq!(solver.solve(&board, &tiles("ab"))?[0].cells, best.cells);
        }
        Ok(())
    }

    #[test]
    fn test_errors() -> Result<(), Error> {
        let config = small_config();
        let trie = Trie::from_words(WORDS)?;
        let board = small_board(&config);

        let empty = Trie::default();
        let result = Solver::new(&config, &empty).solve(&board, &tiles("a"));
        assert!(matches!(result, Err(Error::MissingDictionary)));

        let wordfeud = Config::wordfeud(Language::EN);
        let result = Solver::new(&wordfeud, &trie).solve(&board, &tiles("a"));
        assert!(matches!(result, Err(Error::BoardSizeMismatch { rows: 5, .. })));

        let no_center = Config::wordfeud(Language::EN).with_grid(Grid::empty(5, 5));
        let empty_board = Board::new(no_center.grid());
        let result = Solver::new(&no_center, &trie).solve(&empty_board, &tiles("a"));
        assert!(matches!(result, Err(Error::MissingCenter)));
        assert!(result.unwrap_err().is_configuration());

        let long = tiles(&"a".repeat(40));
        let result = Solver::new(&config, &trie).solve(&board, &long);
        assert!(matches!(result, Err(Error::RackTooLarge(40))));

        let no_rack = small_config().with_rack_size(0);
        let result = Solver::new(&no_rack, &trie).solve(&board, &tiles("a"));
        assert!(matches!(result, Err(Error::InvalidRackSize(0))));
        Ok(())
    }

    #[test]
    fn test_checks_before_empty_rack() -> Result<(), Error> {
        let trie = Trie::from_words(WORDS)?;
        let config = small_config();
        let board = small_board(&config);
        let wordfeud = Config::wordfeud(Language::EN);
        let result = Solver::new(&wordfeud, &trie).solve(&board, &[]);
        assert!(matches!(result, Err(Error::BoardSizeMismatch { rows: 5, .. })));
        let result = Solver::new(&config, &Trie::default()).solve(&board, &[]);
        assert!(matches!(result, Err(Error::MissingDictionary)));
        assert!(Solver::new(&config, &trie).solve(&board, &[])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_move_counts() -> Result<(), Error> {
        let config = small_config();
        let trie = Trie::from_words(&["cat", "ta", "as"])?;
        let board = small_board(&config);
        // "as" below "t" also forms "ta": 2 + 2 points
        let moves = Solver::new(&config, &trie).solve(&board, &tiles("sa"))?;
        let best = &moves[0];
        assert_eq!(best.word(), "as");
        assert_eq!(best.points, 4);
        assert_eq!((best.cells[0].row, best.cells[0].col), (3, 3));
        assert_eq!(best.tiles, vec![Tile::letter('a'), Tile::letter('s')]);
        assert_eq!(best.tiles_count(), 2);
        assert_eq!(best.blanks_count(), 0);
        assert_eq!(best.words_count(), 2);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_move_json() -> Result<(), Error> {
        let config = small_config();
        let trie = Trie::from_words(WORDS)?;
        let moves = Solver::new(&config, &trie).solve(&small_board(&config), &tiles("s"))?;
        let json = serde_json::to_string(&moves[0]).unwrap();
        assert!(json.contains("\"numberOfCollisions\""));
        assert!(json.contains("\"numberOfWords\""));
        assert!(json.contains("\"tiles\""));
        assert!(json.contains("\"isBlank\""));
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, moves[0]);
        Ok(())
    }
}

use crate::board::{Board, Cell};
use crate::pattern::{cross_patterns, Pattern};
use crate::tiles::{Rack, Tile};
use crate::trie::Trie;
use crate::Error;
use log::trace;

/// Assigns rack tiles to the empty cells of pattern skeletons, keeping only
/// the assignments where every word formed is in the dictionary.
#[derive(Debug, Clone, Copy)]
pub struct PatternsFiller<'a> {
    trie: &'a Trie,
}

impl<'a> PatternsFiller<'a> {
    pub fn new(trie: &'a Trie) -> PatternsFiller<'a> {
        PatternsFiller { trie }
    }

    /// Return all valid fillings of `skeleton` with tiles from `rack`.
    /// ## Errors
    /// `PatternConflict` if a letter of the skeleton differs from the board,
    /// `CellOutOfBounds` if the skeleton does not fit on the board.
    pub fn fill(
        &self,
        board: &Board,
        skeleton: &Pattern,
        rack: &Rack,
    ) -> Result<Vec<Pattern>, Error> {
        let patterns: Vec<Pattern> = self.fillings(board, skeleton, rack)?.collect();
        trace!("{}: {} fillings", skeleton, patterns.len());
        Ok(patterns)
    }

    /// Lazily iterate over the valid fillings of `skeleton`.
    ///
    /// Same checks as [`fill`](PatternsFiller::fill). When the skeleton has more
    /// empty cells than there are tiles on the rack, the iterator is empty.
    pub fn fillings<'b>(
        &self,
        board: &'b Board,
        skeleton: &'b Pattern,
        rack: &Rack,
    ) -> Result<Fillings<'b>, Error>
    where
        'a: 'b,
    {
        for cell in skeleton.cells() {
            let on_board = board.cell_at(cell.row, cell.col).ok_or(Error::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
            })?;
            if on_board.letter != cell.letter {
                return Err(Error::PatternConflict {
                    row: cell.row,
                    col: cell.col,
                });
            }
        }
        let mut stack = Vec::new();
        if skeleton.empty_count() <= rack.len() {
            stack.push(Frame {
                pos: 0,
                node: self.trie.root(),
                rack: *rack,
                letters: Vec::with_capacity(skeleton.len()),
            });
        }
        Ok(Fillings {
            trie: self.trie,
            board,
            skeleton,
            stack,
        })
    }
}

/// Partial assignment: `letters` holds the (letter, is_blank) of the first `pos`
/// cells, `node` is the trie node they spell and `rack` the tiles left.
#[derive(Debug, Clone)]
struct Frame {
    pos: usize,
    node: usize,
    rack: Rack,
    letters: Vec<(char, bool)>,
}

impl Frame {
    fn next(&self, node: usize, rack: Rack, letter: char, is_blank: bool) -> Frame {
        let mut letters = self.letters.clone();
        letters.push((letter, is_blank));
        Frame {
            pos: self.pos + 1,
            node,
            rack,
            letters,
        }
    }
}

/// Depth first search over the assignments of a skeleton, using an explicit stack.
///
/// A branch is pruned as soon as the letters so far are not a prefix in the trie.
/// Cross words are checked once the main word is complete.
pub struct Fillings<'a> {
    trie: &'a Trie,
    board: &'a Board,
    skeleton: &'a Pattern,
    stack: Vec<Frame>,
}

impl<'a> Fillings<'a> {
    /// Push the frames that extend `frame` with one more cell, in search order.
    fn expand(&mut self, frame: &Frame) {
        let skeleton = self.skeleton;
        let cell = &skeleton.cells()[frame.pos];
        let mut next = Vec::new();
        if let Some(letter) = cell.letter {
            if let Some(node) = self.trie.child(frame.node, letter) {
                next.push(frame.next(node, frame.rack, letter, cell.is_blank));
            }
        } else {
            let mut tried: Vec<Tile> = Vec::with_capacity(frame.rack.len());
            for (i, tile) in frame.rack.iter().enumerate() {
                if tried.contains(tile) {
                    continue;
                }
                tried.push(*tile);
                let rack = frame.rack.remove(i);
                match tile.letter {
                    Some(letter) => {
                        if let Some(node) = self.trie.child(frame.node, letter) {
                            next.push(frame.next(node, rack, letter, false));
                        }
                    }
                    None => {
                        for (letter, node) in self.trie.children(frame.node) {
                            next.push(frame.next(node, rack, letter, true));
                        }
                    }
                }
            }
        }
        self.stack.extend(next.into_iter().rev());
    }

    /// Build the pattern for a complete assignment, if all cross words are valid.
    fn complete(&self, frame: &Frame) -> Option<Pattern> {
        if !self.trie.is_terminal(frame.node) {
            return None;
        }
        let skeleton = self.skeleton;
        let placed: Vec<bool> = skeleton.cells().iter().map(Cell::is_empty).collect();
        if !placed.contains(&true) {
            return None;
        }
        let cells: Vec<Cell> = skeleton
            .cells()
            .iter()
            .zip(&frame.letters)
            .map(|(cell, &(letter, is_blank))| match cell.letter {
                Some(_) => *cell,
                None => cell.with_letter(letter, is_blank),
            })
            .collect();
        let crosses = cross_patterns(self.board, skeleton.direction(), &cells, &placed);
        if crosses.iter().all(|cross| self.trie.contains(&cross.word())) {
            Some(Pattern::filled(skeleton.direction(), cells, placed, crosses))
        } else {
            None
        }
    }
}

impl<'a> Iterator for Fillings<'a> {
    type Item = Pattern;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            if frame.pos == self.skeleton.len() {
                if let Some(pattern) = self.complete(&frame) {
                    return Some(pattern);
                }
            } else {
                self.expand(&frame);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::pattern::Direction;

    const WORDS: &[&str] = &["cat", "cats", "scat", "at", "ta", "ca"];

    fn test_board() -> Board {
        let grid = Grid::empty(5, 5);
        Board::from_strings(&grid, &[".....", ".cat.", ".....", ".....", "....."]).unwrap()
    }

    fn skeleton(
        board: &Board,
        direction: Direction,
        index: usize,
        start: usize,
        end: usize,
    ) -> Pattern {
        let cells = board.line(direction, index)[start..=end]
            .iter()
            .map(|&&cell| cell)
            .collect();
        Pattern::skeleton(direction, cells)
    }

    fn words(patterns: &[Pattern]) -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_fill() -> Result<(), Error> {
        let trie = Trie::from_words(WORDS)?;
        let board = test_board();
        let filler = PatternsFiller::new(&trie);
        let rack: Rack = "sx".parse()?;

        let front = skeleton(&board, Direction::Horizontal, 1, 0, 3);
        assert_eq!(words(&filler.fill(&board, &front, &rack)?), vec!["1 0 H scat"]);
        let back = skeleton(&board, Direction::Horizontal, 1, 1, 4);
        let patterns = filler.fill(&board, &back, &rack)?;
        assert_eq!(words(&patterns), vec!["1 1 H cats"]);
        assert_eq!(patterns[0].placed_count(), 1);
        assert_eq!(patterns[0].collisions().len(), 3);
        Ok(())
    }

    #[test]
    fn test_fill_blank() -> Result<(), Error> {
        let trie = Trie::from_words(WORDS)?;
        let board = test_board();
        let filler = PatternsFiller::new(&trie);
        let back = skeleton(&board, Direction::Horizontal, 1, 1, 4);
        let patterns = filler.fill(&board, &back, &"*".parse()?)?;
        assert_eq!(words(&patterns), vec!["1 1 H catS"]);
        // a letter and a blank give two different fillings
        let patterns = filler.fill(&board, &back, &"s*".parse()?)?;
        assert_eq!(words(&patterns), vec!["1 1 H cats", "1 1 H catS"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_tiles() -> Result<(), Error> {
        let trie = Trie::from_words(WORDS)?;
        let board = test_board();
        let filler = PatternsFiller::new(&trie);
        let back = skeleton(&board, Direction::Horizontal, 1, 1, 4);
        let patterns = filler.fill(&board, &back, &"ss".parse()?)?;
        assert_eq!(patterns.len(), 1);
        Ok(())
    }

    #[test]
    fn test_cross_words() -> Result<(), Error> {
        let trie = Trie::from_words(WORDS)?;
        let board = test_board();
        let filler = PatternsFiller::new(&trie);
        // below "ca": "at" forms "ca" and "at", "ta" would form "ct" and "aa"
        let below = skeleton(&board, Direction::Horizontal, 2, 1, 2);
        let patterns = filler.fill(&board, &below, &"ta".parse()?)?;
        assert_eq!(words(&patterns), vec!["2 1 H at"]);
        let crosses: Vec<String> = patterns[0].crosses().iter().map(Pattern::word).collect();
        assert_eq!(crosses, vec!["ca", "at"]);
        Ok(())
    }

    #[test]
    fn test_rack_too_small() -> Result<(), Error> {
        let trie = Trie::from_words(WORDS)?;
        let board = test_board();
        let filler = PatternsFiller::new(&trie);
        let row = skeleton(&board, Direction::Horizontal, 0, 0, 2);
        assert!(filler.fill(&board, &row, &"ca".parse()?)?.is_empty());
        assert!(filler.fill(&board, &row, &Rack::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_pattern_conflict() -> Result<(), Error> {
        let trie = Trie::from_words(WORDS)?;
        let board = test_board();
        let other = Board::from_strings(
            &Grid::empty(5, 5),
            &[".....", ".cut.", ".....", ".....", "....."],
        )?;
        let filler = PatternsFiller::new(&trie);
        let stale = skeleton(&other, Direction::Horizontal, 1, 1, 4);
        assert!(matches!(
            filler.fill(&board, &stale, &"s".parse()?),
            Err(Error::PatternConflict { row: 1, col: 2 })
        ));
        Ok(())
    }
}

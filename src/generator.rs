use crate::board::{Board, Cell};
use crate::config::Config;
use crate::pattern::{Direction, Pattern};
use crate::Error;
use log::trace;

/// Enumerates the pattern skeletons of a board: the line segments where a move
/// can be played.
///
/// A segment qualifies when it
/// - lies in one row or one column and is at least 2 cells long,
/// - is not directly preceded or followed by an occupied cell,
/// - contains at least one anchor,
/// - has at least one and at most `max_tiles` empty cells.
///
/// Rows are scanned before columns, and within a line segments are ordered by
/// start, then by end. The order only depends on the board and the config.
#[derive(Debug, Clone, Copy)]
pub struct PatternsGenerator<'a> {
    config: &'a Config,
}

impl<'a> PatternsGenerator<'a> {
    pub fn new(config: &'a Config) -> PatternsGenerator<'a> {
        PatternsGenerator { config }
    }

    /// Generate all skeletons that can be filled with at most `max_tiles` tiles.
    /// ## Errors
    /// `MissingCenter` or `CenterOutOfBounds` if the board is empty and has no valid start cell.
    pub fn generate(&self, board: &Board, max_tiles: usize) -> Result<Vec<Pattern>, Error> {
        let anchors = board.anchors(self.config.grid().center())?;
        let mut is_anchor = vec![vec![false; board.cols()]; board.rows()];
        for &(row, col) in &anchors {
            is_anchor[row][col] = true;
        }
        let mut patterns = Vec::new();
        if max_tiles == 0 {
            return Ok(patterns);
        }
        for &direction in &[Direction::Horizontal, Direction::Vertical] {
            for index in 0..board.line_count(direction) {
                let line = board.line(direction, index);
                let anchored: Vec<bool> = line
                    .iter()
                    .map(|cell| is_anchor[cell.row][cell.col])
                    .collect();
                let before = patterns.len();
                patterns.extend(line_patterns(direction, &line, &anchored, max_tiles));
                trace!(
                    "{:?} line {}: {} skeletons",
                    direction,
                    index,
                    patterns.len() - before
                );
            }
        }
        Ok(patterns)
    }
}

/// The skeletons of one line.
fn line_patterns(
    direction: Direction,
    line: &[&Cell],
    anchored: &[bool],
    max_tiles: usize,
) -> Vec<Pattern> {
    let n = line.len();
    let mut patterns = Vec::new();
    for start in 0..n {
        if start > 0 && !line[start - 1].is_empty() {
            continue;
        }
        let mut empty = 0;
        let mut has_anchor = false;
        for end in start..n {
            if line[end].is_empty() {
                empty += 1;
            }
            has_anchor |= anchored[end];
            if empty > max_tiles {
                break;
            }
            if end == start || empty == 0 || !has_anchor {
                continue;
            }
            if end + 1 < n && !line[end + 1].is_empty() {
                continue;
            }
            let cells = line[start..=end].iter().map(|&&cell| cell).collect();
            patterns.push(Pattern::skeleton(direction, cells));
        }
    }
    patterns
}

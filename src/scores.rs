use crate::config::Config;
use crate::pattern::Pattern;

/// Calculates the points of filled patterns.
///
/// Letters already on the board count at face value. A newly placed letter is
/// multiplied by the letter factor of its square, and the word by the word factors
/// of all squares covered by new letters. Blanks are worth 0.
/// Each cross word is scored the same way, and a bonus is added when the move
/// uses at least a full rack of tiles.
#[derive(Debug, Clone, Copy)]
pub struct ScoresCalculator<'a> {
    config: &'a Config,
}

impl<'a> ScoresCalculator<'a> {
    pub fn new(config: &'a Config) -> ScoresCalculator<'a> {
        ScoresCalculator { config }
    }

    /// Total points of `pattern`: main word, cross words and bonus.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Config, Direction, Language, Pattern};
    /// # use scrabble_solver::{Error, ScoresCalculator};
    /// let config = Config::scrabble(Language::EN);
    /// let board = Board::new(config.grid());
    /// let pattern = Pattern::place(&board, 7, 6, Direction::Horizontal, "cat")?;
    /// // (3 + 1 + 1) * 2 for the double word center square
    /// assert_eq!(ScoresCalculator::new(&config).calculate(&pattern), 10);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn calculate(&self, pattern: &Pattern) -> u32 {
        let mut points = self.word_points(pattern);
        points += pattern
            .crosses()
            .iter()
            .map(|cross| self.word_points(cross))
            .sum::<u32>();
        if pattern.placed_count() >= self.config.rack_size() {
            points += self.config.bingo_bonus();
        }
        points
    }

    /// Points of a single word, without cross words or bonus.
    pub fn word_points(&self, pattern: &Pattern) -> u32 {
        let mut sum = 0;
        let mut word_factor = 1;
        for (cell, placed) in pattern.slots() {
            let letter = match cell.letter {
                Some(letter) => letter,
                None => continue,
            };
            let value = if cell.is_blank {
                0
            } else {
                self.config.points(letter)
            };
            if placed {
                sum += value * cell.multiplier.letter_factor();
                word_factor *= cell.multiplier.word_factor();
            } else {
                sum += value;
            }
        }
        sum * word_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::grid::Grid;
    use crate::pattern::Direction;
    use crate::tilesets::Language;
    use crate::Error;

    const TEST_STATE: &[&str] = &[
        "    t     c   f",
        "    e    he   o",
        "    r   bis g k",
        "    u  bol te v",
        "    gepof dimme",
        "      la vree e",
        "    qua   ene  ",
        "      Spoelen  ",
        "     s a   n   ",
        "     c d we    ",
        "     hadden    ",
        "    nu o   y   ",
        "  wrat siJzen  ",
        "    k     os   ",
        "   zerk   g    ",
    ];

    #[test]
    fn test_existing_letters() -> Result<(), Error> {
        let config = Config::wordfeud(Language::NL);
        let board = Board::from_strings(config.grid(), TEST_STATE)?;
        let calculator = ScoresCalculator::new(&config);
        // the t on the triple word square was already there
        let pattern = Pattern::place(&board, 0, 3, Direction::Horizontal, "ster")?;
        assert_eq!(calculator.calculate(&pattern), 7);
        Ok(())
    }

    #[test]
    fn test_cross_word() -> Result<(), Error> {
        let config = Config::wordfeud(Language::NL);
        let board = Board::from_strings(config.grid(), TEST_STATE)?;
        let calculator = ScoresCalculator::new(&config);
        let pattern = Pattern::place(&board, 6, 3, Direction::Vertical, "abel")?;
        assert_eq!(calculator.word_points(&pattern), 18);
        assert_eq!(pattern.crosses().len(), 1);
        assert_eq!(pattern.crosses()[0].word(), "aqua");
        assert_eq!(calculator.word_points(&pattern.crosses()[0]), 14);
        assert_eq!(calculator.calculate(&pattern), 32);
        Ok(())
    }

    #[test]
    fn test_bingo() -> Result<(), Error> {
        let config = Config::wordfeud(Language::NL);
        let board = Board::new(config.grid());
        let calculator = ScoresCalculator::new(&config);
        let pattern = Pattern::place(&board, 7, 7, Direction::Horizontal, "hoentje")?;
        assert_eq!(calculator.calculate(&pattern), 28 + 40);

        let config = Config::wordfeud(Language::EN);
        let calculator = ScoresCalculator::new(&config);
        let pattern = Pattern::place(&board, 7, 7, Direction::Horizontal, "wordfeud")?;
        assert_eq!(calculator.calculate(&pattern), 38 + 40);
        Ok(())
    }

    #[test]
    fn test_bonus_threshold() -> Result<(), Error> {
        let config = Config::default()
            .with_grid(Grid::empty(1, 5).with_center(0, 2))
            .with_rack_size(3)
            .with_bingo_bonus(25);
        let board = Board::new(config.grid());
        let calculator = ScoresCalculator::new(&config);
        let cat = Pattern::place(&board, 0, 1, Direction::Horizontal, "cat")?;
        let at = Pattern::place(&board, 0, 2, Direction::Horizontal, "at")?;
        // c=4 a=1 t=1 in english wordfeud
        assert_eq!(calculator.calculate(&cat), 6 + 25);
        assert_eq!(calculator.calculate(&at), 2);
        Ok(())
    }

    #[test]
    fn test_blank() -> Result<(), Error> {
        let config = Config::wordfeud(Language::EN);
        let board = Board::new(config.grid());
        let calculator = ScoresCalculator::new(&config);
        // the last letter lands on a double letter square
        let plain = Pattern::place(&board, 7, 12, Direction::Horizontal, "fud")?;
        let blank = Pattern::place(&board, 7, 12, Direction::Horizontal, "fuD")?;
        assert_eq!(calculator.calculate(&plain), 4 + 2 + 2 * 2);
        assert_eq!(calculator.calculate(&blank), 4 + 2);
        Ok(())
    }

    #[test]
    fn test_blank_on_board() -> Result<(), Error> {
        let config = Config::wordfeud(Language::NL);
        let board = Board::from_strings(config.grid(), TEST_STATE)?;
        let calculator = ScoresCalculator::new(&config);
        // row 7 holds a blank S: "Spoelen" + s
        let pattern = Pattern::place(&board, 7, 6, Direction::Horizontal, "Spoelens")?;
        let points = calculator.word_points(&pattern);
        // p4 o1 e1 l3 e1 n1 and the new s=2 on a plain square
        assert_eq!(points, 4 + 1 + 1 + 3 + 1 + 1 + 2);
        Ok(())
    }
}

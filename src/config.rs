use crate::grid::Grid;
use crate::tiles::MAX_RACK;
use crate::tilesets::{Game, Language, TileSet};
use crate::Error;

/// The rules of a game variant used for solving: the board layout, the tile values,
/// the rack capacity and the bonus for playing a full rack ("bingo").
#[derive(Debug, Clone)]
pub struct Config {
    grid: Grid,
    tileset: TileSet,
    rack_size: usize,
    bingo_bonus: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::wordfeud(Language::EN)
    }
}

impl Config {
    /// Create a config from a layout and a tile distribution, with a rack of 7 tiles
    /// and no bingo bonus.
    pub fn new(grid: Grid, tileset: TileSet) -> Config {
        Config {
            grid,
            tileset,
            rack_size: 7,
            bingo_bonus: 0,
        }
    }

    /// Wordfeud: 15x15 board, start square without bonus, 40 points for using all 7 tiles.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Config, Language};
    /// let config = Config::wordfeud(Language::NL);
    /// assert_eq!(config.bingo_bonus(), 40);
    /// assert_eq!(config.points('z'), 5);
    /// ```
    pub fn wordfeud(language: Language) -> Config {
        Config::new(Grid::wordfeud(), TileSet::new(Game::Wordfeud, language)).with_bingo_bonus(40)
    }

    /// Scrabble: 15x15 board, double word start square, 50 points for using all 7 tiles.
    pub fn scrabble(language: Language) -> Config {
        Config::new(Grid::scrabble(), TileSet::new(Game::Scrabble, language)).with_bingo_bonus(50)
    }

    pub fn with_grid(mut self, grid: Grid) -> Config {
        self.grid = grid;
        self
    }

    pub fn with_rack_size(mut self, rack_size: usize) -> Config {
        self.rack_size = rack_size;
        self
    }

    pub fn with_bingo_bonus(mut self, bingo_bonus: u32) -> Config {
        self.bingo_bonus = bingo_bonus;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// Number of tiles on a full rack.
    pub fn rack_size(&self) -> usize {
        self.rack_size
    }

    pub fn bingo_bonus(&self) -> u32 {
        self.bingo_bonus
    }

    /// Value of a (non-blank) tile with `letter`.
    pub fn points(&self, letter: char) -> u32 {
        self.tileset.points(letter)
    }

    /// Check the layout and the rack size.
    /// ## Errors
    /// - `InvalidRackSize` if `rack_size` is 0 or more than `MAX_RACK`.
    /// - A grid error if the grid is empty or ragged, or the start square is outside it.
    pub fn validate(&self) -> Result<(), Error> {
        if self.rack_size == 0 || self.rack_size > MAX_RACK {
            return Err(Error::InvalidRackSize(self.rack_size));
        }
        self.grid.validate()
    }
}

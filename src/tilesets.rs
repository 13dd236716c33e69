use crate::trie::normalize;

mod en;
mod nl;

/// Letter used for the blank tile in a tile distribution.
pub const BLANK: char = '*';

/// These languages are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English
    EN,
    /// Dutch
    NL,
}

/// The game variant, which decides tile values and the board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Scrabble,
    Wordfeud,
}

/// letter, count, points
pub type TileInfo = (char, u32, u32);

/// The tile distribution of a game: how many tiles of each letter there are,
/// and the value of each letter. The blank (`*`) is worth 0 points.
#[derive(Debug, Clone)]
pub struct TileSet {
    language: Language,
    game: Game,
    tiles: &'static [TileInfo],
}

impl TileSet {
    /// Return a new `TileSet` for game and language.
    pub fn new(game: Game, language: Language) -> TileSet {
        let tiles = match (game, language) {
            (Game::Wordfeud, Language::EN) => en::WORDFEUD,
            (Game::Wordfeud, Language::NL) => nl::WORDFEUD,
            (Game::Scrabble, Language::EN) => en::SCRABBLE,
            (Game::Scrabble, Language::NL) => nl::SCRABBLE,
        };
        TileSet {
            language,
            game,
            tiles,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn game(&self) -> Game {
        self.game
    }

    /// All (letter, count, points) entries, the blank first.
    pub fn tiles(&self) -> &'static [TileInfo] {
        self.tiles
    }

    fn info(&self, letter: char) -> Option<&TileInfo> {
        let letter = normalize(letter);
        self.tiles.iter().find(|(l, _, _)| *l == letter)
    }

    /// Return the points for letter, or 0 if not found
    pub fn points(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |&(_, _, points)| points)
    }

    /// Return the number of tiles with this letter in tileset, or 0 if not found
    pub fn count(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |&(_, count, _)| count)
    }
}

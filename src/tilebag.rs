use crate::board::Board;
use crate::config::Config;
use crate::tiles::{Rack, Tile};
use crate::tilesets::BLANK;
use multiset::HashMultiSet;
use std::iter::FromIterator;
use std::ops::Deref;
use std::ops::Sub;

/// Keeps track of the tiles: a multiset of letters and blanks.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Tile>);

impl Deref for TileBag {
    type Target = HashMultiSet<Tile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl FromIterator<Tile> for TileBag {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TileBag {
    /// All tiles of the game in `config`.
    pub fn full(config: &Config) -> Self {
        let mut bag = HashMultiSet::new();
        for &(letter, count, _points) in config.tileset().tiles() {
            let tile = if letter == BLANK {
                Tile::blank()
            } else {
                Tile::letter(letter)
            };
            if count > 0 {
                bag.insert_times(tile, count as usize);
            }
        }
        Self(bag)
    }

    /// The tiles that are not on the board or on the rack: in the bag or
    /// on the racks of the other players. Blanks on the board count as blanks.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Config, Rack, Tile, TileBag};
    /// let config = Config::default();
    /// let board = Board::new(config.grid());
    /// let rack: Rack = "aa*".parse().unwrap();
    /// let bag = TileBag::remaining(&config, &board, &rack);
    /// assert_eq!(bag.len(), 104 - 3);
    /// assert_eq!(bag.count_of(&Tile::blank()), 1);
    /// ```
    pub fn remaining(config: &Config, board: &Board, rack: &Rack) -> Self {
        let played: TileBag = board
            .iter()
            .filter_map(|cell| {
                cell.letter.map(|letter| {
                    if cell.is_blank {
                        Tile::blank()
                    } else {
                        Tile::letter(letter)
                    }
                })
            })
            .chain(rack.iter().copied())
            .collect();
        TileBag::full(config) - played
    }
}

//! Tiles and the rack of tiles available to the player.
use crate::trie::normalize;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// Maximum number of tiles on a rack.
pub const MAX_RACK: usize = 32;

/// A tile from the rack: a letter, or a blank (`letter` is None) that can be used as any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pub letter: Option<char>,
}

impl Tile {
    /// A tile with `letter`, normalized to lowercase.
    pub fn letter(letter: char) -> Tile {
        Tile {
            letter: Some(normalize(letter)),
        }
    }

    /// A blank tile.
    pub fn blank() -> Tile {
        Tile { letter: None }
    }

    pub fn is_blank(&self) -> bool {
        self.letter.is_none()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter.unwrap_or('*'))
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '*' | '?' => Ok(Tile::blank()),
            ch if ch.is_alphabetic() => Ok(Tile::letter(ch)),
            ch => Err(Error::InvalidTile(ch)),
        }
    }
}

type Tiles = ArrayVec<[Tile; MAX_RACK]>;

/// The tiles available for a move. Each tile can be used at most once.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rack(Tiles);

impl Rack {
    pub fn new() -> Rack {
        Rack(Tiles::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Tile> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Tile] {
        self.0.as_slice()
    }

    /// Return the rack without the tile at `pos`.
    pub fn remove(&self, pos: usize) -> Rack {
        let mut rack = *self;
        rack.0.remove(pos);
        rack
    }

    /// Number of blanks on the rack.
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|tile| tile.is_blank()).count()
    }
}

impl TryFrom<&[Tile]> for Rack {
    type Error = Error;
    fn try_from(tiles: &[Tile]) -> Result<Self, Self::Error> {
        if tiles.len() > MAX_RACK {
            return Err(Error::RackTooLarge(tiles.len()));
        }
        Ok(Rack(tiles.iter().copied().collect()))
    }
}

impl FromStr for Rack {
    type Err = Error;

    /// Parse a rack from letters, `*` or `?` for a blank. Spaces are ignored.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Rack, Error};
    /// let rack: Rack = "ab*".parse()?;
    /// assert_eq!(rack.len(), 3);
    /// assert_eq!(rack.blanks(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(Tile::try_from)
            .collect::<Result<Vec<_>, Error>>()?;
        Rack::try_from(tiles.as_slice())
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in self.iter() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

//! A best-move solver for Scrabble-like word games.
//! <br>
//! Given a board, a rack of tiles and a dictionary, this crate finds the highest
//! scoring legal move: every word formed along the placement line, and every
//! cross word created by a new tile, must be in the dictionary.
//! It can use the `rayon` crate to fill candidate moves in parallel.
//!
//! # How to use `scrabble_solver`
//! Pick a game [`Config`], build a [`Trie`] with the words of the dictionary, and
//! describe the board. Then ask the [`Solver`] for the best move for a rack.
//!
//! # Basic usage
//!  ```
//! use scrabble_solver::{Board, Config, Language, Rack, Solver, Trie};
//!
//! let config = Config::scrabble(Language::EN);
//! let trie = Trie::from_words(&["rust", "rest", "rusty", "trust"])?;
//! let mut board = Board::new(config.grid());
//! let solver = Solver::new(&config, &trie);
//!
//! let rack: Rack = "tsur".parse()?;
//! let moves = solver.solve(&board, rack.as_slice())?;
//! assert_eq!(moves[0].word(), "rust");
//! board.apply(&moves[0])?;
//!
//! let rack: Rack = "ty".parse()?;
//! let moves = solver.solve(&board, rack.as_slice())?;
//! assert_eq!(moves[0].word(), "rusty");
//! println!("{}", board);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The solver runs a pipeline of small, stateless steps:
//! - [`PatternsGenerator`] lists the line segments (pattern skeletons) where a move can be played.
//! - [`PatternsFiller`] assigns rack tiles to the empty cells of each skeleton,
//!   pruning on dictionary prefixes and checking cross words.
//! - Duplicates are removed by their structural [`PatternKey`].
//! - [`ScoresCalculator`] scores each candidate, and the best one wins.
//!
//! The dictionary is a read-only [`Trie`], stored breadth first with a bitset of
//! child labels per node.
mod board;
mod config;
mod error;
mod filler;
mod generator;
mod grid;
mod labelset;
mod pattern;
mod scores;
mod solver;
mod tilebag;
mod tiles;
mod tilesets;
mod trie;

pub use board::{Board, Cell};
pub use config::Config;
pub use error::Error;
pub use filler::{Fillings, PatternsFiller};
pub use generator::PatternsGenerator;
pub use grid::{Grid, Multiplier};
pub use labelset::{Label, LabelSet};
pub use pattern::{Direction, Pattern, PatternKey};
pub use scores::ScoresCalculator;
pub use solver::{Move, PlacedCell, Solver};
pub use tilebag::TileBag;
pub use tiles::{Rack, Tile, MAX_RACK};
pub use tilesets::{Game, Language, TileSet};
pub use trie::{Alphabet, Trie, TrieBuilder};

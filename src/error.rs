use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a serialized trie
    #[error("Trie file \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing a serialized trie
    #[error("Trie file \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded trie
    #[cfg(feature = "bincode")]
    #[error("Trie file {0} could not be deserialized")]
    TrieDeserializeError(String),

    /// Error serializing trie with bincode
    #[cfg(feature = "bincode")]
    #[error("Trie file {0} could not be serialized")]
    TrieSerializeError(String),

    /// The dictionary used for solving holds no words
    #[error("Missing dictionary: the trie contains no words")]
    MissingDictionary,

    /// The words use more distinct letters than a trie node can index
    #[error("Alphabet too large: {0} distinct letters (max 63)")]
    AlphabetTooLarge(usize),

    /// A rack tile is not a letter or a blank
    #[error("Invalid tile '{0}'")]
    InvalidTile(char),

    /// More tiles than a rack can hold
    #[error("Rack too large: {0} tiles (max {})", crate::tiles::MAX_RACK)]
    RackTooLarge(usize),

    /// The configured rack size is zero or larger than a rack can hold
    #[error("Invalid rack size {0} (expect 1..={})", crate::tiles::MAX_RACK)]
    InvalidRackSize(usize),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect {1})")]
    InvalidRowCount(usize, usize),

    /// A row of the board state or grid has the wrong number of cells
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// The board does not have the dimensions of the configured layout
    #[error("Board is {rows}x{cols}, layout is {expect_rows}x{expect_cols}")]
    BoardSizeMismatch {
        rows: usize,
        cols: usize,
        expect_rows: usize,
        expect_cols: usize,
    },

    /// The board is empty and the layout has no start square
    #[error("Board is empty and no center cell is defined")]
    MissingCenter,

    /// The start square lies outside the layout
    #[error("Center cell row={row}, col={col} is outside the board")]
    CenterOutOfBounds { row: usize, col: usize },

    /// The board is not a consistent rectangular grid
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    /// A cell coordinate outside the board
    #[error("Cell row={row}, col={col} is outside the board")]
    CellOutOfBounds { row: usize, col: usize },

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at row={row}, col={col} does not fit")]
    TilePlacementError {
        row: usize,
        col: usize,
        horizontal: bool,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },

    /// A pattern skeleton disagrees with the board it was generated from
    #[error("Pattern conflicts with the board at row:{row}, col:{col}")]
    PatternConflict { row: usize, col: usize },
}

impl Error {
    /// Check if the error is caused by an inconsistent board or game configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidRowCount(..)
                | Error::InvalidRowLength(..)
                | Error::GridParseError(_)
                | Error::BoardSizeMismatch { .. }
                | Error::MissingCenter
                | Error::CenterOutOfBounds { .. }
                | Error::InvalidBoard(_)
                | Error::InvalidRackSize(_)
        )
    }
}

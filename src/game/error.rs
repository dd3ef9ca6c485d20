use thiserror::Error;

/// Puzzle content that cannot be loaded into a session.
///
/// Raised for anything that arrives from outside the engine (generated
/// puzzles in particular). A refresh that fails with one of these leaves the
/// live grid and theme untouched.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("grid has no tiles")]
    EmptyGrid,

    #[error("grid row {row} has {found} tiles, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid of {rows}x{cols} exceeds the {max}x{max} limit")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    #[error("tile at ({row}, {col}) is {value:?}, expected a single letter A-Z")]
    InvalidTile { row: usize, col: usize, value: String },

    #[error("theme field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("theme has no words")]
    NoThemeWords,

    #[error("theme word {0:?} must contain only letters A-Z")]
    InvalidWord(String),

    #[error("theme word {word:?} is shorter than {min} letters")]
    WordTooShort { word: String, min: usize },

    #[error("theme word {word:?} is longer than the {tiles} tiles on the grid")]
    WordTooLong { word: String, tiles: usize },
}

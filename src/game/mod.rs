// Puzzle engine: board, selection chain, word judging, session state

pub mod content;
pub mod engine;
pub mod error;
pub mod grid;
pub mod judge;
pub mod selection;

pub use content::PuzzleContent;
pub use engine::PuzzleEngine;
pub use error::ContentError;
pub use grid::Grid;
pub use judge::{Judgement, Verdict, WordJudge};
pub use selection::{SelectOutcome, SelectionController};

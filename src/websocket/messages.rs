use serde::{Deserialize, Serialize};

use crate::{game::SelectOutcome, models::GameSnapshot};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Select { row: usize, col: usize },
    Submit,
    ClearSelection,
    UseHint,
    Reset,
    Refresh,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState {
        state: GameSnapshot,
    },
    Selection {
        outcome: SelectOutcome,
        current_word: String,
    },
    SelectionCleared,
    WordScored {
        word: String,
        score_delta: u32,
        spangram: bool,
    },
    WordRejected {
        word: String,
        reason: RejectReason,
    },
    HintUsed {
        remaining: u32,
    },
    NoHintsLeft,
    GameReset,
    PuzzleRefreshed {
        theme_name: String,
    },
    /// The game has ended; only a reset starts a new one
    GameOver {
        score: u32,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Nothing was selected
    EmptySelection,
    /// The dictionary did not recognize the word, or could not be reached
    NotAWord,
    AlreadyFound,
    NotInTheme,
}

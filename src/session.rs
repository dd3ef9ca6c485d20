//! The live puzzle session behind the HTTP and WebSocket surfaces.
//!
//! `PuzzleEngine` is synchronous and assumes one operation at a time. The
//! session keeps it behind an async mutex so concurrent requests queue up,
//! and it consults the dictionary and content generator on the engine's
//! behalf.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex};

use crate::{
    dictionary::WordValidator,
    game::{PuzzleEngine, Verdict},
    generator::ContentGenerator,
    models::GameSnapshot,
    websocket::messages::{ClientMessage, RejectReason, ServerMessage},
};

/// Buffered snapshots per subscriber before it starts lagging
const UPDATE_CHANNEL_CAPACITY: usize = 32;

/// What an action did, plus the state it left behind
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub event: ServerMessage,
    pub state: GameSnapshot,
}

pub struct GameSession {
    engine: Mutex<PuzzleEngine>,
    validator: Arc<dyn WordValidator>,
    generator: Arc<dyn ContentGenerator>,
    updates: broadcast::Sender<GameSnapshot>,
}

impl GameSession {
    pub fn new(
        engine: PuzzleEngine,
        validator: Arc<dyn WordValidator>,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            engine: Mutex::new(engine),
            validator,
            generator,
            updates,
        }
    }

    /// Receive a snapshot every time the session changes
    pub fn subscribe(&self) -> broadcast::Receiver<GameSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.engine.lock().await.snapshot()
    }

    pub async fn handle(&self, msg: ClientMessage) -> ActionResult {
        match msg {
            ClientMessage::Select { row, col } => self.select(row, col).await,
            ClientMessage::Submit => self.submit().await,
            ClientMessage::ClearSelection => self.clear_selection().await,
            ClientMessage::UseHint => self.use_hint().await,
            ClientMessage::Reset => self.reset().await,
            ClientMessage::Refresh => self.refresh().await,
        }
    }

    pub async fn select(&self, row: usize, col: usize) -> ActionResult {
        let mut engine = self.engine.lock().await;
        let outcome = engine.select(row, col);
        tracing::debug!("Select ({}, {}): {:?}", row, col, outcome);

        let event = ServerMessage::Selection {
            outcome,
            current_word: engine.current_word(),
        };
        self.respond(&engine, event, outcome.changed())
    }

    /// Submit the selected word.
    ///
    /// The dictionary is consulted first, with the engine still locked so no
    /// other action can change the selection mid-lookup. A word the
    /// dictionary rejects keeps its selection; anything else clears it.
    pub async fn submit(&self) -> ActionResult {
        let mut engine = self.engine.lock().await;
        let word = engine.current_word();

        if word.is_empty() {
            let event = ServerMessage::WordRejected {
                word,
                reason: RejectReason::EmptySelection,
            };
            return self.respond(&engine, event, false);
        }

        if !self.validator.is_valid_word(&word).await {
            tracing::info!("{} is not a dictionary word", word);
            let event = ServerMessage::WordRejected {
                word,
                reason: RejectReason::NotAWord,
            };
            return self.respond(&engine, event, false);
        }

        let Some(submission) = engine.submit() else {
            let event = ServerMessage::WordRejected {
                word,
                reason: RejectReason::EmptySelection,
            };
            return self.respond(&engine, event, false);
        };

        let judgement = submission.judgement;
        let event = match judgement.verdict {
            Verdict::ThemeWord | Verdict::Spangram => {
                tracing::info!(
                    "Found {} for {} points ({}/{} answers, score {})",
                    submission.word,
                    judgement.score_delta,
                    engine.found_words().len(),
                    engine.theme().answer_count(),
                    engine.score()
                );
                ServerMessage::WordScored {
                    word: submission.word,
                    score_delta: judgement.score_delta,
                    spangram: judgement.verdict == Verdict::Spangram,
                }
            }
            Verdict::AlreadyFound => ServerMessage::WordRejected {
                word: submission.word,
                reason: RejectReason::AlreadyFound,
            },
            Verdict::NotInTheme => ServerMessage::WordRejected {
                word: submission.word,
                reason: RejectReason::NotInTheme,
            },
            Verdict::EmptySelection => ServerMessage::WordRejected {
                word: submission.word,
                reason: RejectReason::EmptySelection,
            },
        };

        if judgement.is_accepted() && engine.all_words_found() {
            tracing::info!("All words found, final score {}", engine.score());
            engine.finish();
        }

        self.respond(&engine, event, true)
    }

    pub async fn clear_selection(&self) -> ActionResult {
        let mut engine = self.engine.lock().await;
        engine.clear_selection();
        self.respond(&engine, ServerMessage::SelectionCleared, true)
    }

    pub async fn use_hint(&self) -> ActionResult {
        let mut engine = self.engine.lock().await;
        if engine.use_hint() {
            let event = ServerMessage::HintUsed {
                remaining: engine.hints(),
            };
            self.respond(&engine, event, true)
        } else {
            self.respond(&engine, ServerMessage::NoHintsLeft, false)
        }
    }

    pub async fn reset(&self) -> ActionResult {
        let mut engine = self.engine.lock().await;
        engine.reset();
        tracing::info!("Game reset");
        self.respond(&engine, ServerMessage::GameReset, true)
    }

    /// Fetch a new puzzle and swap it in.
    ///
    /// The generator runs without holding the engine, so play continues
    /// while it works. Any failure leaves the current puzzle in place.
    /// A finished game is never refreshed; it has to be reset first.
    pub async fn refresh(&self) -> ActionResult {
        {
            let engine = self.engine.lock().await;
            if engine.is_game_over() {
                return self.game_over(&engine);
            }
        }

        let generated = self.generator.generate().await;

        let mut engine = self.engine.lock().await;
        // The game may have ended while the generator was working
        if engine.is_game_over() {
            return self.game_over(&engine);
        }
        let content = match generated {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Puzzle generation failed: {}", e);
                let event = ServerMessage::Error {
                    message: e.to_string(),
                };
                return self.respond(&engine, event, false);
            }
        };

        match engine.refresh(content) {
            Ok(()) => {
                tracing::info!("Loaded new puzzle {:?}", engine.theme().name);
                let event = ServerMessage::PuzzleRefreshed {
                    theme_name: engine.theme().name.clone(),
                };
                self.respond(&engine, event, true)
            }
            Err(e) => {
                tracing::warn!("Generated puzzle rejected: {}", e);
                let event = ServerMessage::Error {
                    message: format!("generated puzzle rejected: {}", e),
                };
                self.respond(&engine, event, false)
            }
        }
    }

    fn game_over(&self, engine: &PuzzleEngine) -> ActionResult {
        tracing::info!("Refresh refused, game is over");
        let event = ServerMessage::GameOver {
            score: engine.score(),
        };
        self.respond(engine, event, false)
    }

    fn respond(&self, engine: &PuzzleEngine, event: ServerMessage, changed: bool) -> ActionResult {
        let state = engine.snapshot();
        if changed {
            // Nobody listening is fine
            let _ = self.updates.send(state.clone());
        }
        ActionResult { event, state }
    }
}

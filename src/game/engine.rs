use crate::{
    game::{ContentError, Grid, Judgement, PuzzleContent, SelectOutcome, SelectionController, WordJudge},
    models::{GameSnapshot, GameStatus, Position, Theme},
};

/// Hints available at the start of every session
pub const STARTING_HINTS: u32 = 3;

/// A word taken off the board by `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub word: String,
    pub judgement: Judgement,
}

/// One player's puzzle session.
///
/// Pure and synchronous: every operation runs to completion and either
/// applies fully or leaves the session untouched. Callers serialize access.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    initial_theme: Theme,
    initial_grid: Grid,
    theme: Theme,
    grid: Grid,
    found_words: Vec<String>,
    score: u32,
    hints: u32,
    status: GameStatus,
}

impl PuzzleEngine {
    /// Start a session on `content`, which is also what `reset` returns to
    pub fn new(content: PuzzleContent) -> Result<Self, ContentError> {
        let (theme, grid) = content.validate()?;
        Ok(Self {
            initial_theme: theme.clone(),
            initial_grid: grid.clone(),
            theme,
            grid,
            found_words: Vec::new(),
            score: 0,
            hints: STARTING_HINTS,
            status: GameStatus::Playing,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Found words in discovery order
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hints(&self) -> u32 {
        self.hints
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// The selection chain read as a word
    pub fn current_word(&self) -> String {
        SelectionController::current_chain(&self.grid)
    }

    /// True once every theme word and the spangram have been found
    pub fn all_words_found(&self) -> bool {
        self.theme.words.iter().all(|w| self.found_words.contains(w))
            && self.found_words.contains(&self.theme.spangram)
    }

    /// Tap the tile at (row, col). Ignored once the game is over.
    pub fn select(&mut self, row: usize, col: usize) -> SelectOutcome {
        if self.is_game_over() {
            return SelectOutcome::Ignored;
        }
        SelectionController::toggle_select(&mut self.grid, Position::new(row, col))
    }

    /// Submit the current chain as a word.
    ///
    /// Returns `None` without touching anything if nothing is selected.
    /// Otherwise the selection is always cleared, and the score and found
    /// words change only if the word is accepted.
    pub fn submit(&mut self) -> Option<Submission> {
        let word = self.current_word();
        if word.is_empty() {
            return None;
        }

        SelectionController::clear(&mut self.grid);

        let judgement = WordJudge::evaluate(&word, &self.theme, &self.found_words);
        if judgement.is_accepted() {
            tracing::debug!("Accepted {} for {} points", word, judgement.score_delta);
            self.score += judgement.score_delta;
            self.found_words.push(word.clone());
        } else {
            tracing::debug!("Rejected {}: {:?}", word, judgement.verdict);
        }

        Some(Submission { word, judgement })
    }

    pub fn clear_selection(&mut self) {
        SelectionController::clear(&mut self.grid);
    }

    /// Spend one hint. Returns false, leaving the count at zero, when none remain.
    pub fn use_hint(&mut self) -> bool {
        if self.hints == 0 {
            return false;
        }
        self.hints -= 1;
        true
    }

    /// End the session. Selection is cleared and further taps are ignored.
    pub fn finish(&mut self) {
        SelectionController::clear(&mut self.grid);
        self.status = GameStatus::GameOver;
    }

    /// Back to the starting puzzle: initial board and theme, no found words,
    /// zero score, full hints.
    pub fn reset(&mut self) {
        self.theme = self.initial_theme.clone();
        self.grid = self.initial_grid.clone();
        self.found_words.clear();
        self.score = 0;
        self.hints = STARTING_HINTS;
        self.status = GameStatus::Playing;
        tracing::debug!("Session reset to theme {}", self.theme.name);
    }

    /// Swap in a new board and theme together.
    ///
    /// On error nothing changes. Found words, score and hints are kept.
    pub fn refresh(&mut self, content: PuzzleContent) -> Result<(), ContentError> {
        let (theme, grid) = content.validate()?;
        tracing::debug!(
            "Refreshed puzzle to theme {} ({}x{})",
            theme.name,
            grid.rows(),
            grid.cols()
        );
        self.theme = theme;
        self.grid = grid;
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.to_rows(),
            theme: self.theme.clone(),
            found_words: self.found_words.clone(),
            score: self.score,
            hints: self.hints,
            status: self.status,
            is_game_over: self.is_game_over(),
            current_word: self.current_word(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Verdict;

    fn engine() -> PuzzleEngine {
        PuzzleEngine::new(PuzzleContent::sample()).unwrap()
    }

    fn spell(engine: &mut PuzzleEngine, coords: &[(usize, usize)]) {
        for &(row, col) in coords {
            engine.select(row, col);
        }
    }

    const BLUE: [(usize, usize); 4] = [(1, 0), (1, 1), (1, 2), (1, 3)];
    // Paths on the Pets board below
    const CAT: [(usize, usize); 3] = [(0, 0), (0, 1), (0, 2)];
    const DOG: [(usize, usize); 3] = [(1, 0), (1, 1), (1, 2)];
    const PETS: [(usize, usize); 4] = [(0, 3), (1, 3), (2, 2), (2, 3)];

    fn fresh_content() -> PuzzleContent {
        PuzzleContent::from_json(
            r#"{
                "theme": {"id": "pets", "name": "Pets", "words": ["CAT", "DOG"], "spangram": "PETS", "hint": "Furry"},
                "grid": ["CATP", "DOGE", "XXTS"]
            }"#,
        )
        .unwrap()
    }

    fn pets_engine() -> PuzzleEngine {
        PuzzleEngine::new(fresh_content()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.hints(), STARTING_HINTS);
        assert!(engine.found_words().is_empty());
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.current_word(), "");
    }

    #[test]
    fn test_submit_blue() {
        let mut engine = engine();
        spell(&mut engine, &BLUE);
        assert_eq!(engine.current_word(), "BLUE");

        let submission = engine.submit().unwrap();
        assert_eq!(submission.word, "BLUE");
        assert!(submission.judgement.is_accepted());
        assert_eq!(engine.score(), 40);
        assert_eq!(engine.found_words(), ["BLUE"]);
        assert_eq!(engine.current_word(), "");
    }

    #[test]
    fn test_non_adjacent_select_keeps_chain() {
        let mut engine = engine();
        engine.select(0, 0);
        let outcome = engine.select(2, 2);
        assert_eq!(outcome, SelectOutcome::NotAdjacent);
        assert_eq!(engine.current_word(), "R");
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut engine = engine();
        assert!(engine.submit().is_none());
        assert_eq!(engine.score(), 0);
        assert!(engine.found_words().is_empty());
    }

    #[test]
    fn test_rejected_word_still_clears_selection() {
        let mut engine = engine();
        spell(&mut engine, &[(1, 0), (1, 1), (1, 2)]);

        let submission = engine.submit().unwrap();
        assert_eq!(submission.word, "BLU");
        assert_eq!(submission.judgement.verdict, Verdict::NotInTheme);
        assert_eq!(engine.score(), 0);
        assert!(engine.found_words().is_empty());
        assert!(engine.grid().tiles().all(|t| !t.is_selected()));
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let mut engine = engine();
        spell(&mut engine, &BLUE);
        engine.submit();
        spell(&mut engine, &BLUE);

        let submission = engine.submit().unwrap();
        assert_eq!(submission.judgement.verdict, Verdict::AlreadyFound);
        assert_eq!(submission.judgement.score_delta, 0);
        assert_eq!(engine.score(), 40);
        assert_eq!(engine.found_words(), ["BLUE"]);
        assert_eq!(engine.current_word(), "");
    }

    #[test]
    fn test_spangram_scores_fifty() {
        let mut engine = pets_engine();
        spell(&mut engine, &PETS);
        assert_eq!(engine.current_word(), "PETS");

        let submission = engine.submit().unwrap();
        assert_eq!(submission.judgement.verdict, Verdict::Spangram);
        // Four letters would be 40 as a plain word
        assert_eq!(engine.score(), 50);
        assert!(engine.theme().is_spangram("PETS"));
    }

    #[test]
    fn test_found_words_keep_discovery_order() {
        let mut engine = pets_engine();
        spell(&mut engine, &DOG);
        engine.submit();
        spell(&mut engine, &CAT);
        engine.submit();

        assert_eq!(engine.found_words(), ["DOG", "CAT"]);
        assert_eq!(engine.score(), 60);
    }

    #[test]
    fn test_clear_selection() {
        let mut engine = engine();
        spell(&mut engine, &BLUE);
        engine.clear_selection();
        assert_eq!(engine.current_word(), "");
        assert!(engine
            .grid()
            .tiles()
            .all(|t| t.selection_order().is_none()));
    }

    #[test]
    fn test_hints_clamp_at_zero() {
        let mut engine = engine();
        assert!(engine.use_hint());
        assert!(engine.use_hint());
        assert!(engine.use_hint());
        assert_eq!(engine.hints(), 0);

        // No negative hint counts
        assert!(!engine.use_hint());
        assert_eq!(engine.hints(), 0);
    }

    #[test]
    fn test_finish_freezes_selection() {
        let mut engine = engine();
        spell(&mut engine, &[(1, 0), (1, 1)]);
        engine.finish();

        assert!(engine.is_game_over());
        assert_eq!(engine.current_word(), "");
        assert_eq!(engine.select(0, 0), SelectOutcome::Ignored);
        assert!(engine.submit().is_none());
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut engine = engine();
        spell(&mut engine, &BLUE);
        engine.submit();
        engine.use_hint();
        engine.refresh(fresh_content()).unwrap();
        spell(&mut engine, &[(0, 0)]);
        engine.finish();

        engine.reset();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.hints(), STARTING_HINTS);
        assert!(engine.found_words().is_empty());
        assert!(!engine.is_game_over());
        assert_eq!(engine.theme().name, "Colors");
        assert_eq!(engine.grid(), &PuzzleContent::sample().validate().unwrap().1);
    }

    #[test]
    fn test_refresh_replaces_board_and_theme() {
        let mut engine = engine();
        spell(&mut engine, &BLUE);
        engine.submit();
        engine.use_hint();

        engine.refresh(fresh_content()).unwrap();
        assert_eq!(engine.theme().name, "Pets");
        assert_eq!(engine.grid().rows(), 3);
        assert_eq!(engine.score(), 40);
        assert_eq!(engine.hints(), 2);
        assert_eq!(engine.found_words(), ["BLUE"]);

        spell(&mut engine, &CAT);
        let submission = engine.submit().unwrap();
        assert_eq!(submission.word, "CAT");
        assert!(submission.judgement.is_accepted());
        assert_eq!(engine.score(), 70);
    }

    #[test]
    fn test_failed_refresh_leaves_session_alone() {
        let mut engine = engine();
        spell(&mut engine, &[(1, 0), (1, 1)]);
        let before = engine.snapshot();

        let mut bad = fresh_content();
        bad.letters[1].pop();
        let err = engine.refresh(bad).unwrap_err();
        assert!(matches!(err, ContentError::RaggedGrid { .. }));

        let after = engine.snapshot();
        assert_eq!(after.theme, before.theme);
        assert_eq!(after.grid, before.grid);
        assert_eq!(engine.current_word(), "BL");
    }

    #[test]
    fn test_all_words_found_needs_spangram() {
        let mut engine = pets_engine();
        spell(&mut engine, &CAT);
        engine.submit();
        spell(&mut engine, &DOG);
        engine.submit();
        assert!(!engine.all_words_found());

        spell(&mut engine, &PETS);
        engine.submit();
        assert!(engine.all_words_found());
        assert_eq!(engine.score(), 110);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = engine();
        spell(&mut engine, &[(1, 0), (1, 1)]);
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.current_word, "BL");
        assert_eq!(snapshot.grid.len(), 4);
        assert_eq!(snapshot.grid[1][1].selection_order(), Some(1));
        assert_eq!(snapshot.hints, 3);
        assert!(!snapshot.is_game_over);
        assert_eq!(snapshot.status, GameStatus::Playing);
    }
}

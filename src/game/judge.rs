use serde::Serialize;

use crate::models::Theme;

/// Flat award for finding the spangram, regardless of its length
pub const SPANGRAM_SCORE: u32 = 50;
/// Award per letter for any other theme word
pub const POINTS_PER_LETTER: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    ThemeWord,
    Spangram,
    EmptySelection,
    AlreadyFound,
    NotInTheme,
}

/// Result of judging a submitted word against a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Judgement {
    pub verdict: Verdict,
    pub score_delta: u32,
}

impl Judgement {
    fn rejected(verdict: Verdict) -> Self {
        Self {
            verdict,
            score_delta: 0,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::ThemeWord | Verdict::Spangram)
    }
}

pub struct WordJudge;

impl WordJudge {
    /// Judge a word against a theme.
    ///
    /// Matching is exact and case-sensitive against the theme's stored
    /// (uppercase) words. A word already in `already_found` scores nothing.
    ///
    /// Scoring:
    /// - the spangram is worth a flat `SPANGRAM_SCORE`
    /// - any other theme word is worth `POINTS_PER_LETTER` per letter
    pub fn evaluate(word: &str, theme: &Theme, already_found: &[String]) -> Judgement {
        if word.is_empty() {
            return Judgement::rejected(Verdict::EmptySelection);
        }
        if !theme.contains(word) {
            return Judgement::rejected(Verdict::NotInTheme);
        }
        if already_found.iter().any(|w| w == word) {
            return Judgement::rejected(Verdict::AlreadyFound);
        }

        if theme.is_spangram(word) {
            Judgement {
                verdict: Verdict::Spangram,
                score_delta: SPANGRAM_SCORE,
            }
        } else {
            Judgement {
                verdict: Verdict::ThemeWord,
                score_delta: Self::word_score(word),
            }
        }
    }

    fn word_score(word: &str) -> u32 {
        word.chars().count() as u32 * POINTS_PER_LETTER
    }
}

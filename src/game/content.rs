//! Puzzle content arriving from outside the engine.
//!
//! Generated puzzles are treated as hostile input: `PuzzleContent::from_json`
//! only checks the JSON shape, and `PuzzleContent::validate` does the real
//! checks before anything is allowed into a session.

use serde::Deserialize;

use crate::{
    game::{ContentError, Grid},
    models::Theme,
    utils::letters::{normalize_word, MIN_WORD_LEN, SAMPLE_LETTERS, SAMPLE_THEME},
};

/// A theme together with the letters of its board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleContent {
    pub theme: Theme,
    pub letters: Vec<Vec<char>>,
}

#[derive(Debug, Deserialize)]
struct RawPuzzle {
    theme: Theme,
    grid: Vec<RawRow>,
}

/// Rows arrive either as arrays of one-letter strings or as a single string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRow {
    Cells(Vec<String>),
    Word(String),
}

impl PuzzleContent {
    /// The built-in Colors puzzle
    pub fn sample() -> Self {
        Self {
            theme: SAMPLE_THEME.clone(),
            letters: SAMPLE_LETTERS.clone(),
        }
    }

    /// Parse `{"theme": {...}, "grid": [[...], ...]}`.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let raw: RawPuzzle = serde_json::from_str(text)?;

        let mut letters = Vec::with_capacity(raw.grid.len());
        for (row, raw_row) in raw.grid.into_iter().enumerate() {
            let cells = match raw_row {
                RawRow::Word(word) => word.trim().chars().collect(),
                RawRow::Cells(cells) => cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| single_char(cell).ok_or_else(|| ContentError::InvalidTile {
                        row,
                        col,
                        value: cell.clone(),
                    }))
                    .collect::<Result<Vec<char>, _>>()?,
            };
            letters.push(cells);
        }

        Ok(Self {
            theme: raw.theme,
            letters,
        })
    }

    /// Check shape and character set, producing a ready board and a
    /// normalized theme.
    pub fn validate(self) -> Result<(Theme, Grid), ContentError> {
        let grid = Grid::from_letters(&self.letters)?;
        let theme = validate_theme(self.theme, grid.tile_count())?;
        Ok((theme, grid))
    }
}

fn single_char(cell: &str) -> Option<char> {
    let mut chars = cell.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn validate_word(word: &str, field: &'static str, tiles: usize) -> Result<String, ContentError> {
    if word.trim().is_empty() {
        return Err(ContentError::EmptyField(field));
    }
    let normalized = normalize_word(word).ok_or_else(|| ContentError::InvalidWord(word.to_string()))?;
    if normalized.len() < MIN_WORD_LEN {
        return Err(ContentError::WordTooShort {
            word: normalized,
            min: MIN_WORD_LEN,
        });
    }
    if normalized.len() > tiles {
        return Err(ContentError::WordTooLong {
            word: normalized,
            tiles,
        });
    }
    Ok(normalized)
}

/// Trim and uppercase a theme, dropping duplicate words (first one wins)
fn validate_theme(theme: Theme, tiles: usize) -> Result<Theme, ContentError> {
    let name = theme.name.trim().to_string();
    if name.is_empty() {
        return Err(ContentError::EmptyField("name"));
    }
    if theme.words.is_empty() {
        return Err(ContentError::NoThemeWords);
    }

    let spangram = validate_word(&theme.spangram, "spangram", tiles)?;

    let mut words: Vec<String> = Vec::with_capacity(theme.words.len());
    for word in &theme.words {
        let word = validate_word(word, "words", tiles)?;
        if !words.contains(&word) {
            words.push(word);
        }
    }

    Ok(Theme {
        id: theme.id.trim().to_string(),
        name,
        words,
        spangram,
        hint: theme.hint.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = r#"{
        "theme": {
            "id": "fruit",
            "name": "Fruit",
            "words": ["pear", "PLUM", "FIG", "PLUM"],
            "spangram": "ORCHARD",
            "hint": "  Grows on trees "
        },
        "grid": [
            ["P", "E", "A", "R"],
            ["L", "U", "M", "F"],
            ["O", "R", "C", "I"],
            ["H", "A", "R", "G"]
        ]
    }"#;

    #[test]
    fn test_sample_content_validates() {
        let (theme, grid) = PuzzleContent::sample().validate().unwrap();
        assert_eq!(theme, *SAMPLE_THEME);
        assert_eq!(grid.rows(), 4);
    }

    #[test]
    fn test_from_json_and_validate() {
        let content = PuzzleContent::from_json(GENERATED).unwrap();
        assert_eq!(content.letters[1], vec!['L', 'U', 'M', 'F']);

        let (theme, grid) = content.validate().unwrap();
        assert_eq!(theme.words, vec!["PEAR", "PLUM", "FIG"]);
        assert_eq!(theme.hint, "Grows on trees");
        assert_eq!(grid.tile_count(), 16);
    }

    #[test]
    fn test_rows_as_strings() {
        let json = r#"{
            "theme": {"name": "Pets", "words": ["CAT"], "spangram": "CATDOG"},
            "grid": ["CATD", "XOGZ"]
        }"#;
        let content = PuzzleContent::from_json(json).unwrap();
        assert_eq!(content.letters[0], vec!['C', 'A', 'T', 'D']);
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_not_json() {
        let err = PuzzleContent::from_json("Sure! Here is your puzzle").unwrap_err();
        assert!(matches!(err, ContentError::Malformed(_)));
    }

    #[test]
    fn test_missing_grid() {
        let json = r#"{"theme": {"name": "Pets", "words": ["CAT"], "spangram": "CATDOG"}}"#;
        assert!(matches!(
            PuzzleContent::from_json(json).unwrap_err(),
            ContentError::Malformed(_)
        ));
    }

    #[test]
    fn test_multi_letter_cell() {
        let json = r#"{
            "theme": {"name": "Pets", "words": ["CAT"], "spangram": "CATDOG"},
            "grid": [["C", "AT"], ["D", "O"]]
        }"#;
        let err = PuzzleContent::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::InvalidTile { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_ragged_grid_fails_validation() {
        let json = r#"{
            "theme": {"name": "Pets", "words": ["CAT"], "spangram": "CAT"},
            "grid": ["CATD", "XOG"]
        }"#;
        let content = PuzzleContent::from_json(json).unwrap();
        assert!(matches!(
            content.validate().unwrap_err(),
            ContentError::RaggedGrid { .. }
        ));
    }

    #[test]
    fn test_theme_without_words() {
        let mut content = PuzzleContent::sample();
        content.theme.words.clear();
        assert!(matches!(
            content.validate().unwrap_err(),
            ContentError::NoThemeWords
        ));
    }

    #[test]
    fn test_theme_blank_name() {
        let mut content = PuzzleContent::sample();
        content.theme.name = "   ".to_string();
        assert!(matches!(
            content.validate().unwrap_err(),
            ContentError::EmptyField("name")
        ));
    }

    #[test]
    fn test_theme_blank_spangram() {
        let mut content = PuzzleContent::sample();
        content.theme.spangram = String::new();
        assert!(matches!(
            content.validate().unwrap_err(),
            ContentError::EmptyField("spangram")
        ));
    }

    #[test]
    fn test_theme_word_with_symbols() {
        let mut content = PuzzleContent::sample();
        content.theme.words.push("<script>".to_string());
        assert!(matches!(
            content.validate().unwrap_err(),
            ContentError::InvalidWord(_)
        ));
    }

    #[test]
    fn test_theme_word_longer_than_board() {
        let mut content = PuzzleContent::sample();
        content.theme.words.push("A".repeat(17));
        assert!(matches!(
            content.validate().unwrap_err(),
            ContentError::WordTooLong { tiles: 16, .. }
        ));
    }

    #[test]
    fn test_one_letter_words_rejected() {
        // A single tile could never be submitted, so the puzzle would be unwinnable
        let json = r#"{
            "theme": {"name": "Pets", "words": ["CAT", "A"], "spangram": "CATDOG"},
            "grid": ["CATD", "XOGZ"]
        }"#;
        let err = PuzzleContent::from_json(json).unwrap().validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::WordTooShort { ref word, min: MIN_WORD_LEN } if word == "A"
        ));

        let json = r#"{
            "theme": {"name": "Pets", "words": ["CAT"], "spangram": " d "},
            "grid": ["CATD", "XOGZ"]
        }"#;
        let err = PuzzleContent::from_json(json).unwrap().validate().unwrap_err();
        assert!(matches!(err, ContentError::WordTooShort { ref word, .. } if word == "D"));
    }
}

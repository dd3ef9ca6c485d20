use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single letter tile on the board.
///
/// Letter and position never change once the tile exists. Selection state
/// is only touched through the selection controller, which keeps
/// `selection_order` present exactly when `is_selected` is set.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Tile {
    id: String,
    letter: char,
    is_selected: bool,
    selection_order: Option<usize>,
    position: Position,
}

impl Tile {
    pub fn new(letter: char, position: Position) -> Self {
        Self {
            id: format!("{}-{}", position.row, position.col),
            letter,
            is_selected: false,
            selection_order: None,
            position,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Position of this tile in the current chain, if it is part of it
    pub fn selection_order(&self) -> Option<usize> {
        self.selection_order
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn select(&mut self, order: usize) {
        self.is_selected = true;
        self.selection_order = Some(order);
    }

    pub(crate) fn deselect(&mut self) {
        self.is_selected = false;
        self.selection_order = None;
    }
}

/// A themed word list for one puzzle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub words: Vec<String>,
    /// The long bonus answer; scored separately and need not appear in `words`
    pub spangram: String,
    #[serde(default)]
    pub hint: String,
}

impl Theme {
    pub fn is_spangram(&self, word: &str) -> bool {
        self.spangram == word
    }

    /// True for theme words and for the spangram
    pub fn contains(&self, word: &str) -> bool {
        self.is_spangram(word) || self.words.iter().any(|w| w == word)
    }

    /// Every answer the theme has, spangram included
    pub fn answer_count(&self) -> usize {
        if self.words.iter().any(|w| *w == self.spangram) {
            self.words.len()
        } else {
            self.words.len() + 1
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Read-only view of a session, handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub grid: Vec<Vec<Tile>>,
    pub theme: Theme,
    pub found_words: Vec<String>,
    pub score: u32,
    pub hints: u32,
    pub status: GameStatus,
    pub is_game_over: bool,
    /// Letters of the current selection chain in order
    pub current_word: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Theme {
        Theme {
            id: "colors".to_string(),
            name: "Colors".to_string(),
            words: vec!["RED".to_string(), "BLUE".to_string()],
            spangram: "RAINBOW".to_string(),
            hint: String::new(),
        }
    }

    #[test]
    fn test_tile_id_from_position() {
        let tile = Tile::new('Q', Position::new(2, 3));
        assert_eq!(tile.id(), "2-3");
        assert!(!tile.is_selected());
        assert_eq!(tile.selection_order(), None);
    }

    #[test]
    fn test_tile_select_and_deselect() {
        let mut tile = Tile::new('A', Position::new(0, 0));
        tile.select(4);
        assert!(tile.is_selected());
        assert_eq!(tile.selection_order(), Some(4));

        tile.deselect();
        assert!(!tile.is_selected());
        assert_eq!(tile.selection_order(), None);
    }

    #[test]
    fn test_theme_contains_spangram_and_words() {
        let theme = colors();
        assert!(theme.contains("RED"));
        assert!(theme.contains("RAINBOW"));
        assert!(!theme.contains("red"));
        assert!(!theme.contains("GREEN"));
        assert_eq!(theme.answer_count(), 3);
    }

    #[test]
    fn test_theme_answer_count_when_spangram_listed() {
        let mut theme = colors();
        theme.words.push("RAINBOW".to_string());
        assert_eq!(theme.answer_count(), 3);
    }

    #[test]
    fn test_theme_deserialize_defaults_optional_fields() {
        let theme: Theme = serde_json::from_str(
            r#"{"name":"Fruit","words":["APPLE"],"spangram":"ORCHARD"}"#,
        )
        .unwrap();
        assert_eq!(theme.id, "");
        assert_eq!(theme.hint, "");
    }

    #[test]
    fn test_theme_deserialize_requires_words() {
        let parsed = serde_json::from_str::<Theme>(r#"{"name":"Fruit","spangram":"ORCHARD"}"#);
        assert!(parsed.is_err());
    }
}

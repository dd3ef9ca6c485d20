use once_cell::sync::Lazy;

use crate::models::Theme;

/// Shortest word a player can submit or a theme can list
pub const MIN_WORD_LEN: usize = 2;

/// Letters of the built-in starting board
pub static SAMPLE_LETTERS: Lazy<Vec<Vec<char>>> = Lazy::new(|| {
    ["RAIN", "BLUE", "OWGD", "YERN"]
        .iter()
        .map(|row| row.chars().collect())
        .collect()
});

/// Theme that goes with `SAMPLE_LETTERS`
pub static SAMPLE_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    id: "colors".to_string(),
    name: "Colors".to_string(),
    words: ["RED", "BLUE", "GREEN", "YELLOW"]
        .iter()
        .map(|w| w.to_string())
        .collect(),
    spangram: "RAINBOW".to_string(),
    hint: "Look for things that brighten our world".to_string(),
});

/// Normalize a tile character, accepting only ASCII letters.
/// Returns the uppercase form, or `None` for anything else.
pub fn normalize_letter(ch: char) -> Option<char> {
    ch.is_ascii_alphabetic().then(|| ch.to_ascii_uppercase())
}

/// Normalize a whole word the same way tiles are normalized
pub fn normalize_word(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.chars().map(normalize_letter).collect()
}

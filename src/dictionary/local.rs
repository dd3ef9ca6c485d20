use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;

use super::{ValidationError, WordValidator};
use crate::utils::letters::MIN_WORD_LEN;

/// Word list held in memory
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let dictionary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_uppercase())
            .filter(|word| word.len() >= MIN_WORD_LEN)
            .collect();

        Self { words }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordValidator for Dictionary {
    async fn check(&self, word: &str) -> Result<bool, ValidationError> {
        Ok(self.contains(word))
    }
}

//! Dictionary lookups consulted before a word reaches the engine.
//!
//! Any failure to reach a dictionary counts as "not a word"; the engine
//! never sees the difference.

mod local;
mod remote;

pub use local::Dictionary;
pub use remote::RemoteDictionary;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("dictionary request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("dictionary returned status {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait]
pub trait WordValidator: Send + Sync {
    /// Look the word up, reporting transport failures as errors
    async fn check(&self, word: &str) -> Result<bool, ValidationError>;

    /// Look the word up, treating any failure as "not a word"
    async fn is_valid_word(&self, word: &str) -> bool {
        match self.check(word).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Dictionary lookup for {} failed, rejecting word: {}", word, e);
                false
            }
        }
    }
}

/// Validator used when dictionary checks are switched off
pub struct AcceptAll;

#[async_trait]
impl WordValidator for AcceptAll {
    async fn check(&self, word: &str) -> Result<bool, ValidationError> {
        Ok(!word.is_empty())
    }
}

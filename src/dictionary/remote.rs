use async_trait::async_trait;
use reqwest::StatusCode;

use super::{ValidationError, WordValidator};

/// Dictionary backed by an HTTP word-lookup endpoint.
///
/// `GET {base_url}/{word}`: a success status means the word exists and
/// 404 means it does not. Anything else is a lookup failure.
pub struct RemoteDictionary {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteDictionary {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn entry_url(&self, word: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            word.to_lowercase()
        )
    }
}

#[async_trait]
impl WordValidator for RemoteDictionary {
    async fn check(&self, word: &str) -> Result<bool, ValidationError> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(false);
        }

        let url = self.entry_url(word);
        tracing::debug!("Looking up {} at {}", word, url);

        let response = self.client.get(&url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ValidationError::Status(status)),
        }
    }
}

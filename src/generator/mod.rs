//! New puzzle content from an external source.
//!
//! Generated content is untrusted. It is parsed and validated here and again
//! by the engine on refresh, so a bad response can never reach a session.

mod openai;

pub use openai::OpenAiGenerator;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::game::{ContentError, PuzzleContent};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("content generator is not configured (set OPENAI_API_KEY)")]
    NotConfigured,

    #[error("generator request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generator returned status {0}")]
    Status(StatusCode),

    #[error("generator response had no completion text")]
    EmptyCompletion,

    #[error("generated puzzle rejected: {0}")]
    Content(#[from] ContentError),
}

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self) -> Result<PuzzleContent, GeneratorError>;
}

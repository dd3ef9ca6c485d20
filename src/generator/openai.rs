use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{ContentGenerator, GeneratorError};
use crate::{config::GeneratorConfig, game::PuzzleContent};

const PUZZLE_PROMPT: &str = r#"Generate a JSON object with two keys:
1. "theme": an object with fields "id", "name", "words" (an array of at least 4 uppercase English words that fit the theme), "spangram" (one longer uppercase word that sums up the theme), and "hint" (one short sentence).
2. "grid": a 2D array of single uppercase letters, every row the same length, arranged so the theme words and the spangram can be spelled by chaining neighbouring letters (including diagonals).
Return only valid JSON."#;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Puzzle generator backed by an OpenAI-style chat completion endpoint
pub struct OpenAiGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl OpenAiGenerator {
    pub fn new(client: reqwest::Client, config: GeneratorConfig) -> Self {
        Self { client, config }
    }

    fn request_body(&self) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": PUZZLE_PROMPT }],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }
}

#[async_trait]
impl ContentGenerator for OpenAiGenerator {
    async fn generate(&self) -> Result<PuzzleContent, GeneratorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeneratorError::NotConfigured)?;

        tracing::info!("Requesting new puzzle from {}", self.config.model);

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&self.request_body())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeneratorError::Status(response.status()));
        }

        let completion: ChatCompletion = response.json().await?;
        let content = parse_completion(completion)?;

        tracing::info!(
            "Generated puzzle {:?} with {} words",
            content.theme.name,
            content.theme.words.len()
        );
        Ok(content)
    }
}

fn parse_completion(completion: ChatCompletion) -> Result<PuzzleContent, GeneratorError> {
    let text = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GeneratorError::EmptyCompletion)?;

    tracing::debug!("Completion text: {}", text);

    Ok(PuzzleContent::from_json(strip_code_fence(&text))?)
}

/// Models like to wrap JSON in a Markdown fence even when told not to
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryMode {
    /// Ask an HTTP word-lookup endpoint
    Remote,
    /// Use a word list file
    Local,
    /// Accept every word
    Off,
}

impl DictionaryMode {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            "off" => Ok(Self::Off),
            other => bail!("DICTIONARY_MODE must be remote, local or off, got {:?}", other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub mode: DictionaryMode,
    pub api_url: String,
    pub path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: var_or("HOST", "0.0.0.0"),
            port: var_or("PORT", "3000")
                .parse()
                .context("PORT must be a number")?,
            frontend_dir: var_or("FRONTEND_DIR", "./frontend"),
        };

        let dictionary = DictionaryConfig {
            mode: DictionaryMode::parse(&var_or("DICTIONARY_MODE", "remote"))?,
            api_url: var_or(
                "DICTIONARY_API_URL",
                "https://api.dictionaryapi.dev/api/v2/entries/en",
            ),
            path: var_or("DICTIONARY_PATH", "./dictionary.txt"),
            timeout_secs: var_or("DICTIONARY_TIMEOUT_SECS", "5")
                .parse()
                .context("DICTIONARY_TIMEOUT_SECS must be a number")?,
        };

        let generator = GeneratorConfig {
            api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            api_url: var_or(
                "OPENAI_API_URL",
                "https://api.openai.com/v1/chat/completions",
            ),
            model: var_or("OPENAI_MODEL", "gpt-3.5-turbo"),
            temperature: var_or("OPENAI_TEMPERATURE", "0.7")
                .parse()
                .context("OPENAI_TEMPERATURE must be a number")?,
            max_tokens: var_or("OPENAI_MAX_TOKENS", "400")
                .parse()
                .context("OPENAI_MAX_TOKENS must be a number")?,
            timeout_secs: var_or("GENERATOR_TIMEOUT_SECS", "30")
                .parse()
                .context("GENERATOR_TIMEOUT_SECS must be a number")?,
        };

        Ok(Config {
            server,
            dictionary,
            generator,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
impl Config {
    /// Offline configuration: no dictionary, no generator key
    pub fn for_tests() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                frontend_dir: "./frontend".to_string(),
            },
            dictionary: DictionaryConfig {
                mode: DictionaryMode::Off,
                api_url: "http://127.0.0.1:9".to_string(),
                path: "./dictionary.txt".to_string(),
                timeout_secs: 1,
            },
            generator: GeneratorConfig {
                api_key: None,
                api_url: "http://127.0.0.1:9".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                temperature: 0.7,
                max_tokens: 400,
                timeout_secs: 1,
            },
        }
    }
}

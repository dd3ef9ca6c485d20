mod config;
mod dictionary;
mod game;
mod generator;
mod models;
mod routes;
mod session;
mod utils;
mod websocket;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{routing::get, Router};
use config::{Config, DictionaryMode};
use dictionary::{AcceptAll, Dictionary, RemoteDictionary, WordValidator};
use game::{PuzzleContent, PuzzleEngine};
use generator::OpenAiGenerator;
use session::GameSession;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub session: GameSession,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_strands=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Strands server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let validator = build_validator(&config).await?;

    let generator_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.generator.timeout_secs))
        .build()?;
    if config.generator.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, puzzle refresh is disabled");
    }
    let generator = Arc::new(OpenAiGenerator::new(
        generator_client,
        config.generator.clone(),
    ));

    let engine = PuzzleEngine::new(PuzzleContent::sample())?;
    tracing::info!("Starting puzzle: {}", engine.theme().name);

    let state = Arc::new(AppState {
        config: config.clone(),
        session: GameSession::new(engine, validator, generator),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&config.server.frontend_dir);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Pick the dictionary the session consults before accepting a word
async fn build_validator(config: &Config) -> Result<Arc<dyn WordValidator>> {
    let validator: Arc<dyn WordValidator> = match config.dictionary.mode {
        DictionaryMode::Remote => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.dictionary.timeout_secs))
                .build()?;
            tracing::info!("Validating words against {}", config.dictionary.api_url);
            Arc::new(RemoteDictionary::new(client, config.dictionary.api_url.clone()))
        }
        DictionaryMode::Local => match Dictionary::load(&config.dictionary.path).await {
            Ok(dict) => {
                if dict.is_empty() {
                    tracing::warn!("Dictionary at {} has no words", config.dictionary.path);
                }
                Arc::new(dict)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load dictionary: {}. Every word will be rejected.",
                    e
                );
                tracing::warn!(
                    "Download a word list to {} for full functionality",
                    config.dictionary.path
                );
                Arc::new(Dictionary::empty())
            }
        },
        DictionaryMode::Off => {
            tracing::warn!("Dictionary validation disabled");
            Arc::new(AcceptAll)
        }
    };
    Ok(validator)
}

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "word-strands",
        "version": env!("CARGO_PKG_VERSION"),
        "dictionary": state.config.dictionary.mode,
        "generator_configured": state.config.generator.api_key.is_some()
    }))
}

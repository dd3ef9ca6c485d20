use crate::{models::GameSnapshot, session::ActionResult, websocket::messages::ServerMessage, AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub row: usize,
    pub col: usize,
}

type ActionResponse = (StatusCode, Json<ActionResult>);

fn respond(result: ActionResult) -> ActionResponse {
    // Only refresh reports these: a generator failure, or a finished game
    let status = match result.event {
        ServerMessage::Error { .. } => StatusCode::BAD_GATEWAY,
        ServerMessage::GameOver { .. } => StatusCode::CONFLICT,
        _ => StatusCode::OK,
    };
    (status, Json(result))
}

/// Current game state
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<GameSnapshot> {
    Json(state.session.snapshot().await)
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectRequest>,
) -> ActionResponse {
    respond(state.session.select(payload.row, payload.col).await)
}

pub async fn submit(State(state): State<Arc<AppState>>) -> ActionResponse {
    respond(state.session.submit().await)
}

pub async fn clear_selection(State(state): State<Arc<AppState>>) -> ActionResponse {
    respond(state.session.clear_selection().await)
}

pub async fn use_hint(State(state): State<Arc<AppState>>) -> ActionResponse {
    respond(state.session.use_hint().await)
}

pub async fn reset(State(state): State<Arc<AppState>>) -> ActionResponse {
    respond(state.session.reset().await)
}

/// Ask the content generator for a new puzzle
pub async fn refresh(State(state): State<Arc<AppState>>) -> ActionResponse {
    respond(state.session.refresh().await)
}

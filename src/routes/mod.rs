pub mod game;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/game", get(game::get_state))
        .route("/game/select", post(game::select))
        .route("/game/submit", post(game::submit))
        .route("/game/clear", post(game::clear_selection))
        .route("/game/hint", post(game::use_hint))
        .route("/game/reset", post(game::reset))
        .route("/game/refresh", post(game::refresh))
}

use crate::{
    models::GameSnapshot,
    session::GameSession,
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::{
    broadcast::{self, error::RecvError},
    mpsc,
};

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    tracing::info!("WebSocket connection established");

    // Subscribe before reading the snapshot so no change slips between them
    let updates = state.session.subscribe();
    let initial = ServerMessage::GameState {
        state: state.session.snapshot().await,
    };
    if tx.send(initial).await.is_err() {
        return;
    }

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Forward session changes made by any connection
    let mut update_task = tokio::spawn(forward_updates(updates, tx.clone()));

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    let reply = dispatch(&state_for_recv.session, &text).await;
                    if tx.send(reply).await.is_err() {
                        break;
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Client disconnected");
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for any task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
            update_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
            update_task.abort();
        }
        _ = (&mut update_task) => {
            send_task.abort();
            recv_task.abort();
        }
    }

    tracing::info!("WebSocket connection closed");
}

/// Push every session snapshot to one connection until either side goes away
async fn forward_updates(
    mut updates: broadcast::Receiver<GameSnapshot>,
    tx: mpsc::Sender<ServerMessage>,
) {
    loop {
        match updates.recv().await {
            Ok(snapshot) => {
                let msg = ServerMessage::GameState { state: snapshot };
                if tx.send(msg).await.is_err() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                // Only the latest snapshot matters
                tracing::debug!("Client lagged, skipped {} snapshots", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Run one text frame against the session and return the reply
async fn dispatch(session: &GameSession, text: &str) -> ServerMessage {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(client_msg) => {
            tracing::debug!("Client message: {:?}", client_msg);
            session.handle(client_msg).await.event
        }
        Err(e) => {
            tracing::error!("Failed to parse message: {}", e);
            ServerMessage::Error {
                message: format!("Invalid message format: {}", e),
            }
        }
    }
}

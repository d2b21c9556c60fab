use crate::{
    game::{GameSession, Rejection, SessionSettings},
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
use futures::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use std::{sync::Arc, time::Duration};
use tokio::time::Instant;

/// WebSocket upgrade handler; every connection plays its own game
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Run one game session for the lifetime of the connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let mut session = GameSession::new(
        state.assets.clone(),
        SessionSettings::from(&state.config.game),
    );
    let delay = state.config.game.round_advance_delay;
    let mut advance_at: Option<Instant> = None;

    tracing::info!("WebSocket connection established for session {}", session.id());

    if send(&mut sender, &ServerMessage::State(session.snapshot()))
        .await
        .is_err()
    {
        return;
    }

    'connection: loop {
        let outgoing = tokio::select! {
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        apply_client_message(client_msg, &mut session, &mut advance_at, delay)
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse message: {}", e);
                        vec![ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        }]
                    }
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error for session {}: {}", session.id(), e);
                    break;
                }
            },
            _ = wait_until(advance_at) => advance_pending_round(&mut session, &mut advance_at),
        };

        for msg in &outgoing {
            if send(&mut sender, msg).await.is_err() {
                break 'connection;
            }
        }
    }

    tracing::info!(
        "WebSocket connection closed for session {} (final score {})",
        session.id(),
        session.cumulative_score()
    );
}

/// Resolves at `deadline`, or never when no round advance is pending
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// The display delay after a scored word is over: deal the next round
fn advance_pending_round(
    session: &mut GameSession,
    advance_at: &mut Option<Instant>,
) -> Vec<ServerMessage> {
    *advance_at = None;
    session.advance_round();
    vec![ServerMessage::State(session.snapshot())]
}

async fn send(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    match serde_json::to_string(msg) {
        Ok(json) => sender.send(Message::Text(json.into())).await,
        Err(e) => {
            tracing::error!("Failed to serialize message: {}", e);
            Ok(())
        }
    }
}

/// Apply one client command and collect the replies.
///
/// A successful submission arms `advance_at`; reset and redraw disarm it.
fn apply_client_message(
    msg: ClientMessage,
    session: &mut GameSession,
    advance_at: &mut Option<Instant>,
    delay: Duration,
) -> Vec<ServerMessage> {
    let placement = match msg {
        ClientMessage::PlaceTile { rack_index, cell } => session.place_tile(rack_index, cell),
        ClientMessage::MoveTile { from, to } => session.move_tile(from, to),
        ClientMessage::ReturnTile { cell } => session.return_tile(cell),
        ClientMessage::Submit => {
            return match session.submit() {
                Ok(result) => {
                    *advance_at = Some(Instant::now() + delay);
                    vec![
                        ServerMessage::WordScored {
                            word: result.word,
                            score: result.score,
                            cumulative_score: session.cumulative_score(),
                        },
                        ServerMessage::State(session.snapshot()),
                    ]
                }
                Err(Rejection::RoundClosed) => Vec::new(),
                Err(rejection) => vec![
                    ServerMessage::InvalidWord {
                        reason: rejection.to_string(),
                    },
                    ServerMessage::State(session.snapshot()),
                ],
            };
        }
        ClientMessage::Reset => {
            *advance_at = None;
            session.reset_session();
            Ok(())
        }
        ClientMessage::Redraw => {
            *advance_at = None;
            session.redraw_rack();
            Ok(())
        }
    };

    // Rejected drops are not errors; the fresh state snaps the tile back
    if let Err(e) = placement {
        tracing::debug!("Placement rejected for session {}: {}", session.id(), e);
    }

    vec![ServerMessage::State(session.snapshot())]
}

//! Conversational webhook over HTTP.
//!
//! The platform posts an already-recognized intent together with the session
//! fields it stored last turn. The response carries speech, a descriptor for
//! visual rendering and the session to store for next turn.

use crate::voice::Voice;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use snowman_core::{
    Descriptor, Dictionary, DictionaryError, Engine, EngineError, GameSession, Intent,
};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, instrument, warn};

/// One webhook call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRequest {
    /// The recognized intent and its slots.
    #[serde(flatten)]
    pub intent: Intent,
    /// Whether the platform has seen this user before.
    #[serde(default)]
    pub returning_user: bool,
    /// Session fields stored after the previous turn.
    #[serde(default)]
    pub session: Option<GameSession>,
}

/// The webhook's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Lines for the platform to say, in order.
    pub speech: Vec<String>,
    /// Render data for turns that start a game or evaluate a guess.
    pub canvas: Option<Descriptor>,
    /// Session fields to store for the next turn.
    pub session: Option<GameSession>,
}

/// Errors that end a webhook call with a non-200 status.
#[derive(Debug, derive_more::Display)]
pub enum WebhookError {
    /// The body was not a valid request, including corrupt session fields.
    #[display("Malformed request: {}", _0)]
    BadRequest(String),
    /// The word source failed mid-game.
    #[display("{}", _0)]
    Dictionary(DictionaryError),
    /// A previous request panicked while holding the game table.
    #[display("Game table is unavailable")]
    Poisoned,
}

impl std::error::Error for WebhookError {}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match self {
            WebhookError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebhookError::Dictionary(_) | WebhookError::Poisoned => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// The engine and its voice, guarded together.
#[derive(Debug)]
struct Table {
    engine: Engine<Dictionary>,
    voice: Voice,
}

/// State shared by all webhook requests.
#[derive(Debug)]
pub struct AppState {
    table: Mutex<Table>,
}

impl AppState {
    /// Wraps an engine and voice for sharing across requests.
    #[instrument(skip_all)]
    pub fn new(engine: Engine<Dictionary>, voice: Voice) -> Self {
        info!(words = engine.words().len(), "Creating webhook state");
        Self {
            table: Mutex::new(Table { engine, voice }),
        }
    }

    /// Handles one request against the shared engine.
    ///
    /// Refused guesses become a re-prompt that echoes the stored session.
    #[instrument(skip(self, request), fields(intent = request.intent.name()))]
    pub fn respond(&self, request: WebhookRequest) -> Result<WebhookResponse, WebhookError> {
        let WebhookRequest {
            intent,
            returning_user,
            session,
        } = request;

        let mut table = self.table.lock().map_err(|_| {
            error!("Game table mutex poisoned");
            WebhookError::Poisoned
        })?;
        let Table { engine, voice } = &mut *table;

        match engine.handle(&intent, session.clone()) {
            Ok(turn) => {
                let speech = voice.speak(&turn, returning_user);
                let canvas = turn.descriptor();
                debug!(state = ?canvas.as_ref().map(|c| c.state), "Turn complete");
                Ok(WebhookResponse {
                    speech,
                    canvas,
                    session: turn.into_session(),
                })
            }
            Err(EngineError::Guess(err)) => {
                if err.is_invalid_input() {
                    debug!(error = %err, "Unusable guess, re-prompting");
                } else {
                    info!(error = %err, "Guess refused, re-prompting");
                }
                Ok(WebhookResponse {
                    speech: voice.reprompt(&err),
                    canvas: None,
                    session,
                })
            }
            Err(EngineError::Dictionary(err)) => {
                error!(error = %err, "Word source failed");
                Err(WebhookError::Dictionary(err))
            }
        }
    }
}

/// Builds the webhook router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health))
        .with_state(state)
}

#[instrument(skip(state, payload))]
async fn webhook(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Result<Json<WebhookResponse>, WebhookError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected webhook payload");
        WebhookError::BadRequest(rejection.body_text())
    })?;

    state.respond(request).map(Json)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

//! axum route wiring for the phrase service.
//!
//! Handlers are thin: JSON encoding and status mapping only.  The actual
//! audio-resolution decision lives in [`crate::server::api`], where it is
//! tested without an HTTP stack.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::server::api::{self, ApiError};
use crate::store::{PhraseRecord, PhraseStore};
use crate::tts::TtsClient;

// ---------------------------------------------------------------------------
// ServerState
// ---------------------------------------------------------------------------

/// Shared state handed to every handler.
///
/// `tts` is `None` when no credentials are configured; the audio-resolution
/// endpoint then answers with the browser-synthesis arm instead of failing.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<PhraseStore>,
    pub tts: Option<Arc<dyn TtsClient>>,
    pub audio_dir: PathBuf,
    pub images_dir: PathBuf,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the full application router: the three content routes plus the
/// fixed static mounts for pre-rendered audio and images.
pub fn router(state: ServerState) -> Router {
    let audio_files = ServeDir::new(&state.audio_dir);
    let image_files = ServeDir::new(&state.images_dir);

    Router::new()
        .route("/languages", get(list_languages))
        .route("/languages/{id}", get(get_language))
        .route("/generate-audio/{id}", get(generate_audio))
        .nest_service("/audio", audio_files)
        .nest_service("/images", image_files)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /languages` — the whole table.
async fn list_languages(State(state): State<ServerState>) -> Json<Vec<PhraseRecord>> {
    Json(state.store.all().to_vec())
}

/// `GET /languages/{id}` — one record or 404.
async fn get_language(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    match state.store.get(&id) {
        Ok(record) => Json(record.clone()).into_response(),
        Err(_) => not_found(),
    }
}

/// `GET /generate-audio/{id}` — asset URL, generation, or synthesis routing.
async fn generate_audio(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    let result = api::resolve_audio(
        &state.store,
        state.tts.as_deref(),
        &state.audio_dir,
        &id,
    )
    .await;

    match result {
        Ok(response) => Json(response).into_response(),
        Err(ApiError::NotFound) => not_found(),
        Err(ApiError::Upstream(message)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "success": false,
                "message": message,
            })),
        )
            .into_response(),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Language not found" })),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

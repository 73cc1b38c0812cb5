//! YouTube ingestion handler

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct YoutubeRequest {
    pub url: String,
    /// Falls back to the configured default instrument when omitted
    pub instrument: Option<String>,
}

/// `POST /process-youtube` — download a YouTube URL, transcribe it, and
/// return `{"notes": <value>}`. The URL is not validated here; the
/// downloader's own failures surface as the 400 response.
#[tracing::instrument(skip(state, request), fields(instrument = ?request.instrument))]
pub async fn process_youtube(
    State(state): State<Arc<AppState>>,
    Form(request): Form<YoutubeRequest>,
) -> Result<Json<Value>, ApiError> {
    let instrument = request
        .instrument
        .unwrap_or_else(|| state.config.transcribe.default_instrument.clone());

    let notes = state.notes.notes_from_url(&request.url, &instrument).await?;

    Ok(Json(json!({ "notes": notes })))
}

//! File-upload ingestion handler

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

struct UploadForm {
    filename: String,
    bytes: Vec<u8>,
    instrument: Option<String>,
}

/// Pull the file and instrument fields out of the multipart body.
/// Exactly one field named "file" is accepted.
async fn extract_upload(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut instrument: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                if file.is_some() {
                    return Err(ApiError::InvalidRequest(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "upload".to_string());
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("Failed to read file data: {}", e))
                })?;
                file = Some((filename, bytes.to_vec()));
            }
            "instrument" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("Failed to read instrument field: {}", e))
                })?;
                instrument = Some(value);
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| ApiError::InvalidRequest("No file provided".to_string()))?;

    Ok(UploadForm {
        filename,
        bytes,
        instrument,
    })
}

/// `POST /process-file` — stage the uploaded audio, transcribe it, and
/// return `{"instrument": <string>, "notes": <value>}`.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let form = extract_upload(multipart).await?;
    let instrument = form
        .instrument
        .unwrap_or_else(|| state.config.transcribe.default_instrument.clone());

    let notes = state
        .notes
        .notes_from_upload(&form.filename, &form.bytes, &instrument)
        .await?;

    Ok(Json(json!({
        "instrument": instrument,
        "notes": notes,
    })))
}

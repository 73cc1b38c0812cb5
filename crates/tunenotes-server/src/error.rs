//! HTTP error response conversion
//!
//! Every failure maps to the API's single user-visible error shape:
//! `400 {"detail": <message>}`. The internals stay typed; only the boundary
//! collapses them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tunenotes_core::TuneNotesError;

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Failure anywhere in the download/stage/transcribe pipeline
    Pipeline(TuneNotesError),
    /// Request did not match the endpoint contract (e.g. missing file field)
    InvalidRequest(String),
}

impl From<TuneNotesError> for ApiError {
    fn from(err: TuneNotesError) -> Self {
        ApiError::Pipeline(err)
    }
}

impl ApiError {
    fn detail(&self) -> String {
        match self {
            ApiError::Pipeline(err) => err.to_string(),
            ApiError::InvalidRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.detail();
        tracing::warn!(detail = %detail, "Request failed");

        (StatusCode::BAD_REQUEST, Json(ErrorDetail { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunenotes_core::error::DownloadError;

    #[test]
    fn test_pipeline_error_maps_to_400() {
        let err = ApiError::from(TuneNotesError::Download(DownloadError::InvalidUrl(
            "notaurl".to_string(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_detail_is_non_empty() {
        let err = ApiError::from(TuneNotesError::Download(DownloadError::NoAudioStream));
        assert!(!err.detail().is_empty());

        let err = ApiError::InvalidRequest("No file provided".to_string());
        assert_eq!(err.detail(), "No file provided");
    }
}

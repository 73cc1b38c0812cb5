//! Trait seam between HTTP handlers and the transcription pipeline
//!
//! Handlers talk to `NotesService` rather than the concrete pipeline so the
//! router can be exercised in tests without yt-dlp or Python installed.

use async_trait::async_trait;
use serde_json::Value;
use tunenotes_core::{Pipeline, TuneNotesError};

#[async_trait]
pub trait NotesService: Send + Sync {
    /// Download a YouTube URL and return its note sequence
    async fn notes_from_url(&self, url: &str, instrument: &str)
        -> Result<Value, TuneNotesError>;

    /// Transcribe uploaded audio bytes and return their note sequence
    async fn notes_from_upload(
        &self,
        filename: &str,
        bytes: &[u8],
        instrument: &str,
    ) -> Result<Value, TuneNotesError>;
}

/// Production implementation backed by the core pipeline
pub struct PipelineNotesService {
    pipeline: Pipeline,
}

impl PipelineNotesService {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl NotesService for PipelineNotesService {
    async fn notes_from_url(
        &self,
        url: &str,
        instrument: &str,
    ) -> Result<Value, TuneNotesError> {
        self.pipeline.notes_from_url(url, instrument).await
    }

    async fn notes_from_upload(
        &self,
        filename: &str,
        bytes: &[u8],
        instrument: &str,
    ) -> Result<Value, TuneNotesError> {
        self.pipeline
            .notes_from_upload(filename, bytes, instrument)
            .await
    }
}

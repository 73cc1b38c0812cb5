//! Audio-to-notes transcription bridge for tunenotes
//!
//! This crate wraps the Python pitch-tracking routine (librosa pYIN) behind
//! a small async interface. The note sequence it returns is treated as an
//! opaque JSON value by every other layer.

mod error;
mod pitch;

pub use error::TranscribeError;
pub use pitch::PitchTracker;

use serde_json::Value;
use std::path::{Path, PathBuf};

/// Audio-to-notes transcriber
#[derive(Debug)]
pub struct Transcriber {
    python_path: PathBuf,
}

impl Transcriber {
    pub fn new(python_path: PathBuf) -> Self {
        Self { python_path }
    }

    /// Transcribe an audio file into a note sequence for the hinted instrument
    pub async fn transcribe(
        &self,
        input: &Path,
        instrument: &str,
    ) -> Result<Value, TranscribeError> {
        PitchTracker::new(self.python_path.clone())
            .transcribe(input, instrument)
            .await
    }
}

//! Error types for pitch transcription

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("Python not found. Install Python 3.9+")]
    PythonNotFound,

    #[error("Missing Python dependencies (librosa, numpy). Install with: pip install librosa")]
    DependenciesMissing,

    #[error("Failed to load audio: {0}")]
    AudioLoad(String),

    #[error("Pitch analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Failed to parse transcription output: {0}")]
    OutputParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

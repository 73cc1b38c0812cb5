//! Error types for tunenotes-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TuneNotesError>;

#[derive(Error, Debug)]
pub enum TuneNotesError {
    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),

    #[error("Upload rejected: {0}")]
    Staging(#[from] StagingError),

    #[error("Transcription failed: {0}")]
    Transcribe(#[from] tunenotes_transcribe::TranscribeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("yt-dlp not found. Install with: brew install yt-dlp")]
    YtDlpNotFound,

    #[error("yt-dlp failed with exit code: {0:?}")]
    YtDlpFailed(Option<i32>),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Video unavailable or private: {0}")]
    VideoUnavailable(String),

    #[error("No audio stream available")]
    NoAudioStream,

    #[error("Failed to parse metadata: {0}")]
    MetadataParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum StagingError {
    #[error("Uploaded file is empty")]
    EmptyFile,

    #[error("Unusable filename: {0:?}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

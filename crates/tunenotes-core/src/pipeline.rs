//! Acquire → transcribe → cleanup orchestration

use crate::config::Config;
use crate::downloader::Downloader;
use crate::error::{DownloadError, TuneNotesError};
use crate::staging::stage_upload;

use serde_json::Value;
use tracing::{debug, info};
use tunenotes_transcribe::{TranscribeError, Transcriber};

/// One pipeline instance serves all requests; it holds no mutable state.
/// Every call gets its own scratch directory, removed on all exit paths
/// when the `TempDir` guard drops.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Download a YouTube URL and transcribe it into a note sequence
    pub async fn notes_from_url(
        &self,
        url: &str,
        instrument: &str,
    ) -> Result<Value, TuneNotesError> {
        let scratch = tempfile::tempdir_in(self.config.temp_dir())?;
        debug!("Scratch directory: {}", scratch.path().display());

        // A missing binary gets the install-hint error, not a config error
        let yt_dlp_path = self
            .config
            .yt_dlp_path()
            .map_err(|_| DownloadError::YtDlpNotFound)?;
        let python_path = self
            .config
            .python_path()
            .map_err(|_| TranscribeError::PythonNotFound)?;

        let downloader = Downloader::new(yt_dlp_path, scratch.path().to_path_buf());
        let downloaded = downloader.download(url).await?;

        let transcriber = Transcriber::new(python_path);
        let notes = transcriber
            .transcribe(&downloaded.audio_path, instrument)
            .await?;

        info!(
            "Transcribed \"{}\" ({})",
            downloaded.metadata.title, instrument
        );

        Ok(notes)
    }

    /// Stage an uploaded file and transcribe it into a note sequence
    pub async fn notes_from_upload(
        &self,
        filename: &str,
        bytes: &[u8],
        instrument: &str,
    ) -> Result<Value, TuneNotesError> {
        let scratch = tempfile::tempdir_in(self.config.temp_dir())?;
        debug!("Scratch directory: {}", scratch.path().display());

        let python_path = self
            .config
            .python_path()
            .map_err(|_| TranscribeError::PythonNotFound)?;

        let audio_path = stage_upload(scratch.path(), filename, bytes).await?;

        let transcriber = Transcriber::new(python_path);
        let notes = transcriber.transcribe(&audio_path, instrument).await?;

        info!("Transcribed upload \"{}\" ({})", filename, instrument);

        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathsConfig;
    use std::path::PathBuf;

    fn pipeline_with_scratch(scratch: PathBuf) -> Pipeline {
        let mut config = Config::default();
        config.temp.directory = Some(scratch);
        // Point at a binary that cannot exist so the transcribe step fails
        config.paths = PathsConfig {
            yt_dlp: Some(PathBuf::from("/nonexistent/yt-dlp")),
            python: Some(PathBuf::from("/nonexistent/python3")),
        };
        Pipeline::new(config)
    }

    #[tokio::test]
    async fn test_upload_scratch_removed_on_failure() {
        let root = tempfile::tempdir().unwrap();
        let pipeline = pipeline_with_scratch(root.path().to_path_buf());

        let result = pipeline
            .notes_from_upload("take.wav", b"RIFF....WAVE", "flute")
            .await;
        assert!(result.is_err());

        // The per-request scratch directory must be gone even though the
        // transcribe step failed after the file was staged.
        let leftovers: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_body() {
        let root = tempfile::tempdir().unwrap();
        let pipeline = pipeline_with_scratch(root.path().to_path_buf());

        let err = pipeline
            .notes_from_upload("take.wav", b"", "flute")
            .await
            .unwrap_err();
        assert!(matches!(err, TuneNotesError::Staging(_)));
    }

    #[tokio::test]
    async fn test_missing_binaries_surface_install_hints() {
        let root = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.temp.directory = Some(root.path().to_path_buf());

        // Resolve against a PATH holding only the empty scratch dir so
        // neither tool can be found
        let saved_path = std::env::var_os("PATH");
        std::env::set_var("PATH", root.path());

        let pipeline = Pipeline::new(config);
        let url_err = pipeline
            .notes_from_url("https://youtu.be/abc", "flute")
            .await
            .unwrap_err();
        let upload_err = pipeline
            .notes_from_upload("take.wav", b"RIFF", "flute")
            .await
            .unwrap_err();

        match saved_path {
            Some(p) => std::env::set_var("PATH", p),
            None => std::env::remove_var("PATH"),
        }

        assert!(matches!(
            url_err,
            TuneNotesError::Download(DownloadError::YtDlpNotFound)
        ));
        assert!(matches!(
            upload_err,
            TuneNotesError::Transcribe(TranscribeError::PythonNotFound)
        ));
    }

    #[tokio::test]
    async fn test_url_scratch_removed_on_failure() {
        let root = tempfile::tempdir().unwrap();
        let pipeline = pipeline_with_scratch(root.path().to_path_buf());

        let result = pipeline
            .notes_from_url("https://youtu.be/dQw4w9WgXcQ", "flute")
            .await;
        assert!(result.is_err());

        let leftovers: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
        assert!(leftovers.is_empty());
    }
}

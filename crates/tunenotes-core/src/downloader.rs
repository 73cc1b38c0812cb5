//! YouTube audio downloader using yt-dlp

use crate::error::DownloadError;
use serde::Deserialize;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Downloader {
    yt_dlp_path: PathBuf,
    temp_dir: PathBuf,
}

#[derive(Debug)]
pub struct DownloadedAudio {
    pub audio_path: PathBuf,
    pub metadata: TrackMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackMetadata {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub ext: String,
}

impl Downloader {
    pub fn new(yt_dlp_path: PathBuf, temp_dir: PathBuf) -> Self {
        Self { yt_dlp_path, temp_dir }
    }

    /// Download audio from a YouTube URL into the scratch directory.
    ///
    /// The URL is handed to yt-dlp as-is; its own rejection of malformed
    /// or unavailable videos is what surfaces as a typed error here.
    pub async fn download(&self, url: &str) -> Result<DownloadedAudio, DownloadError> {
        info!("Downloading audio from: {}", url);

        let output_template = self.temp_dir.join("%(id)s.%(ext)s");

        let output = Command::new(&self.yt_dlp_path)
            .args([
                // Format selection: best audio, prefer Opus
                "-f", "bestaudio[acodec=opus]/bestaudio[acodec=aac]/bestaudio",
                // Extract audio without re-encoding (keep original codec)
                "--extract-audio",
                "--audio-format", "best",
                "--postprocessor-args", "ExtractAudio:-acodec copy",
                // Output template
                "-o", output_template.to_str().unwrap_or("%(id)s.%(ext)s"),
                // Print JSON to stdout for metadata parsing
                "--print-json",
                "--no-overwrites",
                url,
            ])
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp stderr: {}", stderr);
            return Err(classify_failure(&stderr, url, output.status.code()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let metadata: TrackMetadata = serde_json::from_str(&stdout)
            .map_err(|e| DownloadError::MetadataParse(e.to_string()))?;

        debug!("Downloaded: {} ({})", metadata.title, metadata.id);

        let audio_path = self.find_audio_file(&metadata.id)?;

        Ok(DownloadedAudio { audio_path, metadata })
    }

    fn find_audio_file(&self, video_id: &str) -> Result<PathBuf, DownloadError> {
        // Look for common audio extensions
        let extensions = ["opus", "m4a", "webm", "mp3", "ogg", "aac"];

        for ext in extensions {
            let path = self.temp_dir.join(format!("{}.{}", video_id, ext));
            if path.exists() {
                debug!("Found audio file: {}", path.display());
                return Ok(path);
            }
        }

        Err(DownloadError::NoAudioStream)
    }
}

/// Map yt-dlp stderr output to a typed error
fn classify_failure(stderr: &str, url: &str, exit_code: Option<i32>) -> DownloadError {
    if stderr.contains("Video unavailable") || stderr.contains("Private video") {
        return DownloadError::VideoUnavailable(url.to_string());
    }
    if stderr.contains("is not a valid URL") {
        return DownloadError::InvalidUrl(url.to_string());
    }
    DownloadError::YtDlpFailed(exit_code)
}

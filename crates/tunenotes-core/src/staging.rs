//! Upload staging: writing request bodies into per-request scratch space

use crate::error::StagingError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write uploaded bytes verbatim into `dir` under a sanitized filename.
///
/// The caller owns `dir` (one scratch directory per request), so distinct
/// requests can never collide on a filename.
pub async fn stage_upload(
    dir: &Path,
    filename: &str,
    bytes: &[u8],
) -> Result<PathBuf, StagingError> {
    if bytes.is_empty() {
        return Err(StagingError::EmptyFile);
    }

    let safe_name = sanitize_filename(filename);
    if safe_name.is_empty() || safe_name.chars().all(|c| c == '.') {
        return Err(StagingError::InvalidFilename(filename.to_string()));
    }

    let path = dir.join(&safe_name);
    tokio::fs::write(&path, bytes).await?;
    debug!("Staged upload: {} ({} bytes)", path.display(), bytes.len());

    Ok(path)
}

/// Replace path separators and shell-hostile characters with `_`
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("melody.wav"), "melody.wav");
        assert_eq!(sanitize_filename("a/b\\c:d.mp3"), "a_b_c_d.mp3");
        assert_eq!(sanitize_filename("  spaced.ogg  "), "spaced.ogg");
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
    }

    #[tokio::test]
    async fn test_stage_upload_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = stage_upload(dir.path(), "take.wav", b"RIFF").await.unwrap();

        assert_eq!(path, dir.path().join("take.wav"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"RIFF");
    }

    #[tokio::test]
    async fn test_stage_upload_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let err = stage_upload(dir.path(), "take.wav", b"").await.unwrap_err();
        assert!(matches!(err, StagingError::EmptyFile));
    }

    #[tokio::test]
    async fn test_stage_upload_rejects_unusable_name() {
        let dir = tempfile::tempdir().unwrap();
        let err = stage_upload(dir.path(), "   ", b"data").await.unwrap_err();
        assert!(matches!(err, StagingError::InvalidFilename(_)));

        let err = stage_upload(dir.path(), "..", b"data").await.unwrap_err();
        assert!(matches!(err, StagingError::InvalidFilename(_)));
    }
}

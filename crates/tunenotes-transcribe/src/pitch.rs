//! librosa pYIN pitch tracking via a Python subprocess

use crate::TranscribeError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Monophonic pitch tracker backed by librosa's pYIN implementation
#[derive(Debug)]
pub struct PitchTracker {
    python_path: PathBuf,
}

impl PitchTracker {
    pub fn new(python_path: PathBuf) -> Self {
        Self { python_path }
    }

    /// Transcribe an audio file into a JSON note sequence.
    ///
    /// The instrument hint is handed to the Python routine verbatim; it
    /// selects the pitch search register there and is not interpreted here.
    pub async fn transcribe(
        &self,
        input: &Path,
        instrument: &str,
    ) -> Result<Value, TranscribeError> {
        info!("Transcribing {} ({})", input.display(), instrument);

        // Inline Python script for pitch tracking
        let script = format!(
            r#"
import sys
import json

try:
    import numpy as np
    import librosa
except ImportError as e:
    print(f"Missing dependency: {{e}}", file=sys.stderr)
    sys.exit(1)

instrument = sys.argv[1] if len(sys.argv) > 1 else "flute"

# Pitch search register per instrument; pYIN needs sane fmin/fmax bounds
REGISTERS = {{
    "flute": ("C4", "C7"),
    "violin": ("G3", "A7"),
    "guitar": ("E2", "E6"),
    "piano": ("A0", "C8"),
}}
fmin_note, fmax_note = REGISTERS.get(instrument, ("C2", "C7"))

try:
    y, sr = librosa.load("{input}", sr=22050, mono=True)
    if y.size == 0:
        raise ValueError("audio stream is empty")
except Exception as e:
    print(f"Failed to load audio: {{e}}", file=sys.stderr)
    sys.exit(2)

try:
    f0, voiced_flag, _ = librosa.pyin(
        y,
        fmin=librosa.note_to_hz(fmin_note),
        fmax=librosa.note_to_hz(fmax_note),
        sr=sr,
    )
    times = librosa.times_like(f0, sr=sr)

    # Collapse frame-wise pitches into note segments
    notes = []
    current = None
    for t, voiced, hz in zip(times, voiced_flag, f0):
        name = librosa.hz_to_note(hz) if voiced and not np.isnan(hz) else None
        if current is not None and name != current["note"]:
            current["end_time"] = round(float(t), 3)
            if current["note"] is not None:
                notes.append(current)
            current = None
        if current is None and name is not None:
            current = {{"note": name, "start_time": round(float(t), 3), "end_time": None}}
    if current is not None:
        current["end_time"] = round(float(times[-1]), 3)
        notes.append(current)
except Exception as e:
    print(f"Pitch analysis failed: {{e}}", file=sys.stderr)
    sys.exit(3)

print(json.dumps(notes))
"#,
            input = input.display(),
        );

        let result = Command::new(&self.python_path)
            .args(["-c", &script, instrument])
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&result.stdout);
        let stderr = String::from_utf8_lossy(&result.stderr);

        if !stderr.is_empty() {
            debug!("pYIN stderr: {}", stderr);
        }

        if !result.status.success() {
            let exit_code = result.status.code().unwrap_or(-1);
            return Err(match exit_code {
                1 => TranscribeError::DependenciesMissing,
                2 => TranscribeError::AudioLoad(stderr.trim().to_string()),
                _ => TranscribeError::AnalysisFailed(stderr.trim().to_string()),
            });
        }

        let notes: Value = serde_json::from_str(stdout.trim())
            .map_err(|e| TranscribeError::OutputParse(e.to_string()))?;

        debug!(
            "Transcription produced {} segments",
            notes.as_array().map(|a| a.len()).unwrap_or(0)
        );

        Ok(notes)
    }
}

//! Recording session managing the cassette recorder for a CLI run.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Manages the `CassetteRecorder` for one recording session.
///
/// The cassette is stored in a timestamped directory under the configured
/// root so successive recordings never overwrite each other.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Output directory containing the cassette file.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session under `root`.
    ///
    /// Creates directory at `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new(root: PathBuf) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let commit = get_commit_hash();
        let path = output_dir.join("fs.cassette.yaml");
        let name = format!("{timestamp}-fs");

        Ok(Self {
            fs: Arc::new(Mutex::new(CassetteRecorder::new(path, name, commit))),
            output_dir,
        })
    }

    /// Finish the recorder and write the cassette file to disk.
    ///
    /// Consumes the session; all recording adapters must have been dropped
    /// so the recorder has a single owner again.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.fs)
            .map_err(|_| "Recording adapter for fs still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for fs poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write fs cassette: {e}"))?;

        Ok(self.output_dir)
    }
}

/// Get the current git commit hash, or "unknown" with a warning if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    if let Some(h) = hash {
        h
    } else {
        eprintln!("Warning: Could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_creates_output_directory_and_finishes() {
        let root = std::env::temp_dir().join("slurp_session_test");
        let session = RecordingSession::new(root.clone());
        assert!(session.is_ok(), "RecordingSession::new() should succeed");

        let session = session.unwrap();
        let dir = session.output_dir.clone();
        assert!(dir.exists(), "Output directory should exist after new()");

        let result = session.finish();
        assert!(result.is_ok(), "finish() should succeed");
        assert!(dir.join("fs.cassette.yaml").exists(), "cassette file should be written");

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn finish_fails_while_adapter_holds_the_recorder() {
        let root = std::env::temp_dir().join("slurp_session_refs_test");
        let session = RecordingSession::new(root.clone()).unwrap();

        let extra_ref = Arc::clone(&session.fs);
        let result = session.finish();
        assert!(result.is_err());
        drop(extra_ref);

        let _ = std::fs::remove_dir_all(&root);
    }
}

//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects into a single context.
///
/// The filesystem is the only external boundary. Constructors wire up
/// different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Filesystem for reading file contents.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by real disk I/O.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a recording context that captures port traffic to a cassette.
    ///
    /// Uses the live adapter for actual work. The cassette lands in a
    /// timestamped directory under `root` once the returned session is
    /// finished; the context must be dropped first so the session holds the
    /// only reference to the recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(root: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&session.fs));
        Ok((Self { fs: Box::new(fs) }, session))
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        Ok(Self { fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))) })
    }
}

//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;
use crate::reader::ReadError;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": <ReadError>}`; errors come back as
/// the same typed `ReadError` the live adapter produced.
///
/// # Panics
///
/// Panics if the recorded output cannot be deserialized; a malformed
/// cassette is a broken fixture, not a runtime condition.
fn replayed_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, ReadError> {
    if let Some(err) = output.get("err") {
        let err: ReadError = serde_json::from_value(err.clone())
            .unwrap_or_else(|e| panic!("{context}: failed to deserialize err: {e}"));
        return Err(err);
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .unwrap_or_else(|e| panic!("{context}: failed to deserialize ok: {e}"))
}

impl FileSystem for ReplayingFileSystem {
    fn read(&self, _path: &Path) -> Result<Vec<u8>, ReadError> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("fs", "read");
            interaction.output.clone()
        };
        replayed_result(&output, "fs::read")
    }

    fn read_to_string(&self, _path: &Path) -> Result<String, ReadError> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("fs", "read_to_string");
            interaction.output.clone()
        };
        replayed_result(&output, "fs::read_to_string")
    }
}

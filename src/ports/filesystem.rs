//! Filesystem port for reading file contents.

use std::path::Path;

use crate::reader::ReadError;

/// Provides read access to file contents.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadError`] naming the step that failed (open, size
    /// query, allocation, or read).
    fn read(&self, path: &Path) -> Result<Vec<u8>, ReadError>;

    /// Reads the entire contents of a file as a UTF-8 string, verbatim.
    ///
    /// # Errors
    ///
    /// Returns any error [`FileSystem::read`] returns, plus
    /// [`ReadError::NotUtf8`] when the contents are not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, ReadError>;
}

//! Core read operation: a path in, the file's bytes out.
//!
//! The whole file is read in one blocking call. Size is measured through the
//! open handle's metadata (one `fstat` instead of a seek-to-end round trip,
//! which also works on handles that cannot seek), the buffer is reserved
//! fallibly at exactly that size, and the handle is closed by scope exit on
//! every path, including every failure path.

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Why a read failed. Every variant carries the offending path.
///
/// Variants with a `detail` field preserve the OS error text so that
/// errors stay comparable and serializable across record/replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadError {
    /// The path does not exist.
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The caller may not read the path.
    PermissionDenied {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The path exists but is not a regular file (directory, socket, ...).
    NotAFile {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The open step failed for a reason other than the variants above.
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// OS error text.
        detail: String,
    },
    /// The size of the file could not be determined.
    SizeQuery {
        /// Path that was requested.
        path: PathBuf,
        /// OS error text.
        detail: String,
    },
    /// The buffer for the file contents could not be allocated.
    Allocation {
        /// Path that was requested.
        path: PathBuf,
        /// Number of bytes that could not be reserved.
        requested: u64,
    },
    /// The read step failed with an I/O error.
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// OS error text.
        detail: String,
    },
    /// The contents are not valid UTF-8 (only from [`read_to_string`]).
    NotUtf8 {
        /// Path that was requested.
        path: PathBuf,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "file not found: {}", path.display()),
            Self::PermissionDenied { path } => {
                write!(f, "permission denied: {}", path.display())
            }
            Self::NotAFile { path } => write!(f, "not a regular file: {}", path.display()),
            Self::Open { path, detail } => {
                write!(f, "failed to open {}: {detail}", path.display())
            }
            Self::SizeQuery { path, detail } => {
                write!(f, "failed to determine size of {}: {detail}", path.display())
            }
            Self::Allocation { path, requested } => {
                write!(f, "failed to allocate {requested} bytes for {}", path.display())
            }
            Self::Read { path, detail } => {
                write!(f, "failed to read {}: {detail}", path.display())
            }
            Self::NotUtf8 { path } => write!(f, "not valid UTF-8: {}", path.display()),
        }
    }
}

impl std::error::Error for ReadError {}

/// Reads the entire contents of the file at `path` into an owned byte buffer.
///
/// The returned `Vec<u8>` carries its length explicitly; contents are opaque
/// bytes, embedded zeros are legal, and nothing is null-terminated. The
/// buffer never contains memory that was not actually read.
///
/// At most the size measured at open time is read. If the file shrinks
/// between the size query and the read, the buffer is truncated to the bytes
/// actually read; if it grows, the extra bytes are ignored. A file written
/// to concurrently by another process yields whatever bytes were observed;
/// there is no locking and no snapshot guarantee.
///
/// # Errors
///
/// Returns a [`ReadError`] naming the step that failed: open ([`NotFound`],
/// [`PermissionDenied`], [`Open`]), the regular-file check ([`NotAFile`]),
/// the size query ([`SizeQuery`]), buffer reservation ([`Allocation`]), or
/// the read itself ([`Read`]).
///
/// [`NotFound`]: ReadError::NotFound
/// [`PermissionDenied`]: ReadError::PermissionDenied
/// [`Open`]: ReadError::Open
/// [`NotAFile`]: ReadError::NotAFile
/// [`SizeQuery`]: ReadError::SizeQuery
/// [`Allocation`]: ReadError::Allocation
/// [`Read`]: ReadError::Read
pub fn read_contents(path: &Path) -> Result<Vec<u8>, ReadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReadError::NotFound { path: path.to_path_buf() },
        ErrorKind::PermissionDenied => ReadError::PermissionDenied { path: path.to_path_buf() },
        _ => ReadError::Open { path: path.to_path_buf(), detail: e.to_string() },
    })?;

    let metadata = file
        .metadata()
        .map_err(|e| ReadError::SizeQuery { path: path.to_path_buf(), detail: e.to_string() })?;
    if !metadata.is_file() {
        return Err(ReadError::NotAFile { path: path.to_path_buf() });
    }
    let size = metadata.len();

    let mut contents = Vec::new();
    let capacity = usize::try_from(size)
        .map_err(|_| ReadError::Allocation { path: path.to_path_buf(), requested: size })?;
    contents
        .try_reserve_exact(capacity)
        .map_err(|_| ReadError::Allocation { path: path.to_path_buf(), requested: size })?;

    file.take(size)
        .read_to_end(&mut contents)
        .map_err(|e| ReadError::Read { path: path.to_path_buf(), detail: e.to_string() })?;

    Ok(contents)
}

/// Reads the file at `path` and returns its contents as a `String`.
///
/// Strict UTF-8 validation only. The bytes come back verbatim, with no BOM
/// stripping and no line-ending translation. Callers with binary content
/// should use [`read_contents`] instead.
///
/// # Errors
///
/// Returns any error [`read_contents`] returns, plus
/// [`ReadError::NotUtf8`] when the contents fail UTF-8 validation.
pub fn read_to_string(path: &Path) -> Result<String, ReadError> {
    let contents = read_contents(path)?;
    String::from_utf8(contents).map_err(|_| ReadError::NotUtf8 { path: path.to_path_buf() })
}

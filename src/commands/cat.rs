//! `slurp cat` command.

use std::io::Write;
use std::path::Path;

use crate::context::ServiceContext;

/// Execute the `cat` command.
///
/// Writes the file's bytes to stdout exactly as read: binary-safe, no
/// trailing newline added.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or stdout cannot be
/// written.
pub fn run(ctx: &ServiceContext, path: &Path) -> Result<(), String> {
    let contents = ctx.fs.read(path).map_err(|e| e.to_string())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&contents).map_err(|e| format!("Failed to write to stdout: {e}"))?;
    stdout.flush().map_err(|e| format!("Failed to flush stdout: {e}"))
}

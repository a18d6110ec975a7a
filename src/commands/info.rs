//! `slurp info` command.

use std::path::Path;

use crate::context::ServiceContext;

/// Execute the `info` command.
///
/// Reads the whole file and prints its path, byte length, and whether the
/// contents are valid UTF-8 text.
///
/// # Errors
///
/// Returns an error string if the file cannot be read.
pub fn run(ctx: &ServiceContext, path: &Path) -> Result<(), String> {
    let contents = ctx.fs.read(path).map_err(|e| e.to_string())?;

    println!("Path: {}", path.display());
    println!("Size: {} bytes", contents.len());
    println!("Contents: {}", describe_contents(&contents));
    Ok(())
}

fn describe_contents(contents: &[u8]) -> &'static str {
    if contents.is_empty() {
        "empty"
    } else if std::str::from_utf8(contents).is_ok() {
        "utf-8 text"
    } else {
        "binary"
    }
}

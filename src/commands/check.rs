//! `slurp check` command.

use std::path::PathBuf;

use crate::context::ServiceContext;

/// Execute the `check` command.
///
/// Reads every path in full and prints one line per path: `ok (N bytes)`
/// or the error that stopped the read.
///
/// # Errors
///
/// Returns an error string naming how many paths were unreadable; all
/// paths are attempted before failing.
pub fn run(ctx: &ServiceContext, paths: &[PathBuf]) -> Result<(), String> {
    let mut failures = 0usize;

    for path in paths {
        match ctx.fs.read(path) {
            Ok(contents) => println!("{}: ok ({} bytes)", path.display(), contents.len()),
            Err(e) => {
                failures += 1;
                println!("{}: {e}", path.display());
            }
        }
    }

    if failures > 0 {
        Err(format!("{failures} of {} files unreadable", paths.len()))
    } else {
        Ok(())
    }
}

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `slurp`.
#[derive(Debug, Parser)]
#[command(name = "slurp", version, about = "Read whole files into memory")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a file's raw bytes to stdout.
    Cat {
        /// File to read.
        path: PathBuf,
    },
    /// Print a file's size and whether it is UTF-8 text.
    Info {
        /// File to read.
        path: PathBuf,
    },
    /// Report whether each file is fully readable.
    Check {
        /// Files to read.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

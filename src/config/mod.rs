//! Configuration management

use crate::types::SyncError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for dirsync
#[derive(Debug, Parser)]
#[command(
    name = "dirsync",
    version,
    about = "Incremental one-way directory mirroring"
)]
pub struct Cli {
    /// Source directory to mirror from
    pub source: PathBuf,

    /// Destination directory to mirror into (created if missing)
    pub destination: PathBuf,

    /// File of ignore patterns, one regular expression per line.
    /// Blank lines and lines starting with '#' are skipped.
    #[arg(long, value_name = "PATH")]
    pub ignore_file: Option<PathBuf>,

    /// Suppress the progress bar and summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validated configuration for a mirror run
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination directory
    pub destination: PathBuf,

    /// Optional ignore pattern file; None means nothing is ignored
    pub ignore_file: Option<PathBuf>,

    /// Suppress console output
    pub quiet: bool,
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config {
            source: cli.source,
            destination: cli.destination,
            ignore_file: cli.ignore_file,
            quiet: cli.quiet,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Validate configuration before any file operation starts
    pub fn validate(&self) -> Result<(), SyncError> {
        if !self.source.exists() {
            return Err(SyncError::Config(format!(
                "Source path does not exist: {:?}",
                self.source
            )));
        }

        if !self.source.is_dir() {
            return Err(SyncError::Config(format!(
                "Source path is not a directory: {:?}",
                self.source
            )));
        }

        // Canonicalize where possible so "src" and "./src" compare equal.
        // The destination may not exist yet, so fall back to the raw path.
        let source = self
            .source
            .canonicalize()
            .unwrap_or_else(|_| self.source.clone());
        let destination = self
            .destination
            .canonicalize()
            .unwrap_or_else(|_| self.destination.clone());

        if source == destination {
            return Err(SyncError::Config(
                "Source and destination cannot be the same".to_string(),
            ));
        }

        if destination.starts_with(&source) {
            return Err(SyncError::Config(format!(
                "Destination {:?} is inside the source tree",
                self.destination
            )));
        }

        Ok(())
    }
}

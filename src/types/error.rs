//! Error types for dirsync

use thiserror::Error;

/// Error types for dirsync operations
///
/// Any I/O failure during the walk is fatal to the whole run: errors
/// propagate up through the recursion and abort, there is no retry and no
/// partial-success accounting.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// An ignore pattern failed to compile. Raised at load time, before
    /// any file operation has started.
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl SyncError {
    /// Check if this error was detected before any file was touched
    pub fn is_startup_error(&self) -> bool {
        matches!(self, SyncError::Config(_) | SyncError::Pattern { .. })
    }
}

//! # dirsync - Incremental One-Way Directory Mirroring
//!
//! Copies a source tree into a destination tree, transferring only files
//! that are new or changed. Unchanged files are detected by a size/mtime
//! fast path with a Blake3 content-hash fallback, so repeated runs over a
//! stable tree cost almost nothing. Entries whose names match user-authored
//! regular expressions are skipped entirely.
//!
//! Not a backup tool: nothing is ever deleted from the destination.

// Module declarations
pub mod commands;
pub mod config;
pub mod detect;
pub mod executor;
pub mod filter;
pub mod hash;
pub mod mirror;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use filter::IgnoreSet;
pub use types::{MirrorReport, SyncError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

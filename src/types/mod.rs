//! Core type definitions for dirsync

mod error;
mod report;

pub use error::SyncError;
pub use report::MirrorReport;

//! Console output

mod progress;

pub use progress::SyncProgress;

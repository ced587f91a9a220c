//! MirrorReport - counters accumulated across a mirror walk

/// Counters shared across the whole recursive walk.
///
/// Passed `&mut` down the recursion rather than living in a global.
/// `files_visited` advances exactly once per non-ignored file, whether the
/// file was copied or already up to date; its final value is what the
/// summary reports against the precomputed total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Files visited (copied or skipped as up to date)
    pub files_visited: u64,

    /// Files actually written to the destination
    pub files_copied: u64,

    /// Bytes written to the destination
    pub bytes_copied: u64,

    /// Destination directories created
    pub dirs_created: u64,
}

impl MirrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file that was already up to date
    pub fn record_skip(&mut self) {
        self.files_visited += 1;
    }

    /// Record a completed copy of `bytes` bytes
    pub fn record_copy(&mut self, bytes: u64) {
        self.files_visited += 1;
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }
}

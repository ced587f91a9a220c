//! Ignore pattern matching
//!
//! Patterns are user-authored regular expressions applied to bare entry
//! names with search semantics. They are not globs and are never matched
//! against full paths.

use crate::types::SyncError;
use regex::Regex;
use std::fs;
use std::path::Path;

/// An ordered set of compiled ignore patterns.
///
/// Immutable once loaded; shared read-only across the whole walk. Any
/// matching pattern excludes the entry, so order only affects which
/// pattern "wins" - never the outcome.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    patterns: Vec<Regex>,
}

impl IgnoreSet {
    /// An ignore set that matches nothing (copy everything)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile an ignore set from raw pattern lines.
    ///
    /// Blank lines and `#`-comments are skipped; remaining lines are
    /// compiled in order. The first malformed pattern aborts the load.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, SyncError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let regex = Regex::new(line).map_err(|source| SyncError::Pattern {
                pattern: line.to_string(),
                source,
            })?;
            patterns.push(regex);
        }

        Ok(Self { patterns })
    }

    /// Load an ignore set from a line-oriented pattern file
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let content = fs::read_to_string(path).map_err(SyncError::Io)?;
        Self::from_lines(content.lines())
    }

    /// Check whether a bare entry name matches any pattern.
    ///
    /// Search semantics: a pattern matches if it finds a match anywhere in
    /// the name; authors anchor with `^`/`$` themselves. No match means
    /// the entry is kept.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name))
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

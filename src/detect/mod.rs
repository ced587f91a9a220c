//! Change detection - decides whether a destination file must be rewritten

use crate::hash::fingerprint;
use crate::types::SyncError;
use std::fs;
use std::path::Path;

/// Decide whether `src` must be copied over `dest`.
///
/// Three tiers, cheapest first:
///
/// 1. `dest` missing -> copy, no further checks.
/// 2. Size and mtime both equal -> up to date. Pure metadata, no content
///    read; this is the path almost every file takes on a repeat run.
/// 3. Metadata differs -> fingerprint both files and copy only if the
///    digests differ. Catches a touched-but-identical file (e.g. restored
///    from an archive with a fresh timestamp) without rewriting it.
///
/// # Returns
/// * `Ok(true)` - destination is missing or has different content
/// * `Ok(false)` - destination is already up to date
/// * `Err(SyncError)` - metadata or read failure on either side
pub fn copy_needed(src: &Path, dest: &Path) -> Result<bool, SyncError> {
    if !dest.exists() {
        return Ok(true);
    }

    let src_meta = fs::metadata(src).map_err(SyncError::Io)?;
    let dest_meta = fs::metadata(dest).map_err(SyncError::Io)?;

    if src_meta.len() == dest_meta.len()
        && src_meta.modified().map_err(SyncError::Io)?
            == dest_meta.modified().map_err(SyncError::Io)?
    {
        return Ok(false);
    }

    Ok(fingerprint(src)? != fingerprint(dest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_destination_requires_copy() {
        let dir = TempDir::new().unwrap();
        let src = write_file(&dir, "src.txt", b"hello");
        let dest = dir.path().join("dest.txt");

        assert!(copy_needed(&src, &dest).unwrap());
    }

    #[test]
    fn test_matching_size_and_mtime_skips() {
        let dir = TempDir::new().unwrap();
        let src = write_file(&dir, "src.txt", b"hello");
        let dest = write_file(&dir, "dest.txt", b"hello");

        // Force identical mtimes so the metadata fast path fires
        let mtime = FileTime::from_last_modification_time(&fs::metadata(&src).unwrap());
        filetime::set_file_mtime(&dest, mtime).unwrap();

        assert!(!copy_needed(&src, &dest).unwrap());
    }

    #[test]
    fn test_identical_content_different_mtime_skips() {
        // Metadata mismatch with equal hashes must NOT request a copy
        let dir = TempDir::new().unwrap();
        let src = write_file(&dir, "src.txt", b"same bytes");
        let dest = write_file(&dir, "dest.txt", b"same bytes");

        filetime::set_file_mtime(&dest, FileTime::from_unix_time(1_000_000, 0)).unwrap();

        assert!(!copy_needed(&src, &dest).unwrap());
    }

    #[test]
    fn test_different_content_same_size_requires_copy() {
        let dir = TempDir::new().unwrap();
        let src = write_file(&dir, "src.txt", b"aaaa");
        let dest = write_file(&dir, "dest.txt", b"bbbb");

        // Back-to-back writes can land on the same clock tick; force the
        // mtime mismatch this scenario assumes so the hash tier runs.
        filetime::set_file_mtime(&dest, FileTime::from_unix_time(1_000_000, 0)).unwrap();

        assert!(copy_needed(&src, &dest).unwrap());
    }

    #[test]
    fn test_different_size_different_content_requires_copy() {
        let dir = TempDir::new().unwrap();
        let src = write_file(&dir, "src.txt", b"long content here");
        let dest = write_file(&dir, "dest.txt", b"short");

        assert!(copy_needed(&src, &dest).unwrap());
    }

    #[test]
    fn test_unreadable_source_propagates_error() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("vanished.txt");
        let dest = write_file(&dir, "dest.txt", b"present");

        // Source never existed: metadata lookup fails
        assert!(copy_needed(&src, &dest).is_err());
    }
}

//! Tree mirroring - the recursive walk that drives counting and copying

use crate::detect::copy_needed;
use crate::executor::copy_file_atomic;
use crate::filter::IgnoreSet;
use crate::types::{MirrorReport, SyncError};
use std::fs;
use std::path::Path;

/// Callback for reporting mirror progress
///
/// Arguments:
/// - `visited`: files processed so far (copied or already up to date)
/// - `total`: precomputed total from [`count_files`]
pub type ProgressCallback = Box<dyn Fn(u64, u64)>;

/// Count the plain files under `root` that a mirror run will visit.
///
/// Applies the same ignore set as the mirror, pruning ignored directories
/// whole, so the total matches what the walk will actually process. The
/// result sizes the progress display only; the mirror never consults it
/// for control flow.
pub fn count_files(root: &Path, ignore: &IgnoreSet) -> Result<u64, SyncError> {
    let mut count = 0u64;

    for entry in fs::read_dir(root).map_err(SyncError::Io)? {
        let entry = entry.map_err(SyncError::Io)?;
        let name = entry.file_name();
        if ignore.is_ignored(&name.to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            count += count_files(&path, ignore)?;
        } else {
            count += 1;
        }
    }

    Ok(count)
}

/// Mirror the tree under `src_root` into `dest_root`.
///
/// Depth-first recursion in directory-listing order. For each non-ignored
/// entry: directories are created eagerly on the destination side (so a
/// file copy never fails for a missing parent) and recursed into; files go
/// through the change detector and are copied only when it says so. Every
/// visited file bumps the report counter once and fires the progress
/// callback, copied or not.
///
/// Symlinks are followed: a link to a file is mirrored as a regular file
/// with the target's bytes, a link to a directory is recursed into. Link
/// cycles are not detected.
///
/// Any I/O error aborts the walk and propagates.
pub fn mirror_tree(
    src_root: &Path,
    dest_root: &Path,
    ignore: &IgnoreSet,
    total: u64,
    on_progress: Option<&ProgressCallback>,
) -> Result<MirrorReport, SyncError> {
    let mut report = MirrorReport::new();
    mirror_dir(src_root, dest_root, ignore, total, on_progress, &mut report)?;
    Ok(report)
}

fn mirror_dir(
    src_dir: &Path,
    dest_dir: &Path,
    ignore: &IgnoreSet,
    total: u64,
    on_progress: Option<&ProgressCallback>,
    report: &mut MirrorReport,
) -> Result<(), SyncError> {
    // Create the destination level before listing, including parents on
    // the first call
    if !dest_dir.exists() {
        fs::create_dir_all(dest_dir).map_err(SyncError::Io)?;
        report.dirs_created += 1;
    }

    for entry in fs::read_dir(src_dir).map_err(SyncError::Io)? {
        let entry = entry.map_err(SyncError::Io)?;
        let name = entry.file_name();
        if ignore.is_ignored(&name.to_string_lossy()) {
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest_dir.join(&name);

        if src_path.is_dir() {
            mirror_dir(&src_path, &dest_path, ignore, total, on_progress, report)?;
        } else {
            if copy_needed(&src_path, &dest_path)? {
                let bytes = copy_file_atomic(&src_path, &dest_path)?;
                report.record_copy(bytes);
            } else {
                report.record_skip();
            }

            if let Some(callback) = on_progress {
                callback(report.files_visited, total);
            }
        }
    }

    Ok(())
}

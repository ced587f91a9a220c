//! Metadata-preserving file copy

use crate::types::SyncError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Copy a file using the write-then-rename strategy, preserving metadata.
///
/// 1. Stream from `src` into a temporary `.part` file next to `dest`
/// 2. Flush and sync to disk
/// 3. Apply the source's permissions and mtime to the `.part` file
/// 4. Atomically rename over `dest`
///
/// Preserving the source mtime is what keeps the size/mtime fast path
/// valid on the next run.
///
/// # Returns
/// * `Ok(u64)` - number of bytes copied
/// * `Err(SyncError)` - IO failure at any step
pub fn copy_file_atomic(src: &Path, dest: &Path) -> Result<u64, SyncError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(SyncError::Io)?;
    }

    let part_path = part_path_for(dest);

    let mut src_file = File::open(src).map_err(SyncError::Io)?;
    let mut part_file = File::create(&part_path).map_err(SyncError::Io)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer).map_err(SyncError::Io)?;

        if bytes_read == 0 {
            break; // EOF
        }

        part_file
            .write_all(&buffer[0..bytes_read])
            .map_err(SyncError::Io)?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all().map_err(SyncError::Io)?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src).map_err(SyncError::Io)?;

    fs::set_permissions(&part_path, src_metadata.permissions()).map_err(SyncError::Io)?;

    let mtime = src_metadata.modified().map_err(SyncError::Io)?;
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(&part_path, filetime_mtime).map_err(SyncError::Io)?;

    // Atomic on POSIX systems (single syscall)
    fs::rename(&part_path, dest).map_err(SyncError::Io)?;

    Ok(total_bytes)
}

/// Temp path alongside the destination: `name.ext` -> `name.ext.part`.
/// Appends rather than replacing the extension so `a.txt` and `a.bin`
/// never share a temp file.
fn part_path_for(dest: &Path) -> std::path::PathBuf {
    let mut name = dest.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

//! Content fingerprinting

use crate::types::SyncError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Compute the Blake3 fingerprint of a file's content
///
/// The file is streamed in 64KB blocks, so memory use stays bounded no
/// matter how large the file is. Two files with equal fingerprints are
/// treated as content-identical by the change detector.
///
/// # Arguments
/// * `path` - Path to the file to fingerprint
///
/// # Returns
/// * `Ok([u8; 32])` - 32-byte Blake3 hash
/// * `Err(SyncError)` - IO error if the file cannot be opened or read
pub fn fingerprint(path: &Path) -> Result<[u8; 32], SyncError> {
    let mut file = File::open(path).map_err(SyncError::Io)?;

    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(SyncError::Io)?;

        if bytes_read == 0 {
            break; // EOF
        }

        hasher.update(&buffer[0..bytes_read]);
    }

    let hash = hasher.finalize();
    Ok(*hash.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fingerprint_empty_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"").unwrap();
        temp_file.flush().unwrap();

        let hash = fingerprint(temp_file.path()).unwrap();
        assert_eq!(hash.len(), 32);
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let content = b"Test content for hashing";

        let mut file1 = NamedTempFile::new().unwrap();
        file1.write_all(content).unwrap();
        file1.flush().unwrap();

        let mut file2 = NamedTempFile::new().unwrap();
        file2.write_all(content).unwrap();
        file2.flush().unwrap();

        assert_eq!(
            fingerprint(file1.path()).unwrap(),
            fingerprint(file2.path()).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_different_content() {
        let mut file1 = NamedTempFile::new().unwrap();
        file1.write_all(b"Content A").unwrap();
        file1.flush().unwrap();

        let mut file2 = NamedTempFile::new().unwrap();
        file2.write_all(b"Content B").unwrap();
        file2.flush().unwrap();

        assert_ne!(
            fingerprint(file1.path()).unwrap(),
            fingerprint(file2.path()).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_spans_multiple_blocks() {
        // Content larger than one 64KB read block
        let content = vec![0xabu8; 200 * 1024];

        let mut file1 = NamedTempFile::new().unwrap();
        file1.write_all(&content).unwrap();
        file1.flush().unwrap();

        let mut file2 = NamedTempFile::new().unwrap();
        file2.write_all(&content).unwrap();
        file2.flush().unwrap();

        assert_eq!(
            fingerprint(file1.path()).unwrap(),
            fingerprint(file2.path()).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_nonexistent_file() {
        let result = fingerprint(Path::new("/nonexistent/file.txt"));
        assert!(result.is_err());
    }
}

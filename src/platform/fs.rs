// CourseLens - platform/fs.rs
//
// Course file reading.
//
// Transient I/O errors (WouldBlock, Interrupted, TimedOut) are retried with
// capped backoff; permanent errors are returned immediately. Content is
// decoded as UTF-8 with lossy replacement, matching what a browser text
// read produces for stray bytes.

use crate::util::constants;
use crate::util::error::LoadError;
use std::io;
use std::path::Path;
use std::time::Duration;

const UTF8_BOM: &str = "\u{feff}";

/// Read a course file as text, refusing files larger than `max_bytes`.
pub fn read_text_lossy(path: &Path, max_bytes: u64) -> Result<String, LoadError> {
    let read_err = |source: io::Error| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(read_err)?.len();
    if size > max_bytes {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: max_bytes,
        });
    }

    let bytes = read_with_retry(path).map_err(read_err)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .strip_prefix(UTF8_BOM)
        .unwrap_or(&text)
        .to_string())
}

/// Read raw bytes with transient-error retries.
fn read_with_retry(path: &Path) -> io::Result<Vec<u8>> {
    let mut last_err: Option<io::Error> = None;

    for (attempt, delay_ms) in constants::READ_RETRY_DELAYS_MS.iter().enumerate() {
        match std::fs::read(path) {
            Ok(bytes) => return Ok(bytes),
            Err(e) if is_transient_error(&e) => {
                tracing::debug!(
                    file = %path.display(),
                    attempt = attempt + 1,
                    error = %e,
                    "Transient I/O error, retrying"
                );
                std::thread::sleep(Duration::from_millis(*delay_ms));
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or_else(|| io::Error::other("Unknown read error")))
}

/// Returns true for transient I/O errors that are worth retrying.
fn is_transient_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted | io::ErrorKind::TimedOut
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_and_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.json");
        std::fs::write(&path, "\u{feff}[]").unwrap();
        assert_eq!(read_text_lossy(&path, 1024).unwrap(), "[]");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.json");
        std::fs::write(&path, b"[\"a\xffb\"]").unwrap();
        let text = read_text_lossy(&path, 1024).unwrap();
        assert_eq!(text, "[\"a\u{fffd}b\"]");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_text_lossy(&dir.path().join("absent.json"), 1024);
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn test_size_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.json");
        std::fs::write(&path, vec![b' '; 2048]).unwrap();
        let result = read_text_lossy(&path, 1024);
        assert!(matches!(
            result,
            Err(LoadError::FileTooLarge { size: 2048, max_size: 1024, .. })
        ));
    }

    #[test]
    fn test_transient_classification() {
        assert!(is_transient_error(&io::Error::from(io::ErrorKind::Interrupted)));
        assert!(!is_transient_error(&io::Error::from(io::ErrorKind::NotFound)));
    }
}

//! Synchronous whole-file read and write.
//!
//! The rewriter reads the target once and overwrites it once; neither step
//! is streamed.

use std::fs as std_fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Read text from a file with size and binary checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Returns
/// Decoded text content or an error.
///
/// # Example
///
/// ```rust,ignore
/// use route_io::read_text_safe;
///
/// let content = read_text_safe("routes.js", 1024 * 1024)?;
/// ```
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
        _ => IoError::System(e),
    })?;

    if !metadata.is_file() {
        return Err(IoError::NotAFile(path.to_string_lossy().to_string()));
    }

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let capacity = usize::try_from(metadata.len()).unwrap_or_default();
    let mut buffer = Vec::with_capacity(capacity);
    file.read_to_end(&mut buffer)?;

    debug!(path = %path.display(), bytes = buffer.len(), "read source text");
    decode_buffer(buffer)
}

/// Overwrite a file with `content`, truncating whatever was there.
///
/// No backup is taken and the write is not atomic.
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    std_fs::write(path, content.as_bytes())?;
    debug!(path = %path.display(), bytes = content.len(), "wrote source text");
    Ok(())
}

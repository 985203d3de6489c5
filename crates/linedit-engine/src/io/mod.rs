use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File too large: {path} is {size} bytes, capacity is {max_capacity}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_capacity: usize,
    },
}

/// Read a text file that must fit the buffer capacity
///
/// The capacity check happens before any editing: a file larger than
/// `max_capacity - 1` bytes (one byte is reserved for the end-of-text
/// sentinel) is rejected up front.
pub fn read_file(path: &Path, max_capacity: usize) -> Result<Vec<u8>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let size = fs::metadata(path)?.len();
    if max_capacity == 0 || size > (max_capacity - 1) as u64 {
        return Err(IoError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_capacity,
        });
    }

    fs::read(path).map_err(IoError::Io)
}

/// Write the full logical content back, overwriting prior content entirely
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

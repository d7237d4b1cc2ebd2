// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// The input file could not be read or is not valid UTF-8.
#[derive(Debug, Error)]
#[error("failed to read file '{}': {source}", .path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileReadError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn message_carries_path_and_cause() {
        let err = FileReadError::new(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("No such file or directory"));
        assert!(!msg.contains('\n'));
    }
}

// src/source.rs
use std::path::Path;

use tokio::fs;

use crate::analyzer::Document;
use crate::error::FileReadError;

/// Reads the whole file and splits it into lines with `\n`, `\r\n` or a lone
/// `\r` stripped.
///
/// Empty lines are kept so that line numbers match the file. A trailing
/// terminator does not produce an extra empty line.
pub async fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FileReadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| FileReadError::new(path, e))?;
    Ok(split_lines(&content))
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(end) => {
                lines.push(rest[..end].to_owned());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_owned());
                break;
            }
        }
    }
    lines
}

pub async fn read_document(path: impl AsRef<Path>) -> Result<Document, FileReadError> {
    read_lines(path).await.map(Document::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[tokio::test]
    async fn keeps_order_and_empty_lines() {
        let file = fixture(b"first\n\n  third  \nlast");
        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["first", "", "  third  ", "last"]);
    }

    #[tokio::test]
    async fn strips_crlf_terminators() {
        let file = fixture(b"one\r\ntwo\r\n");
        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn lone_carriage_return_ends_a_line() {
        let file = fixture(b"one\rtwo\rthree");
        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn mixed_terminators() {
        let file = fixture(b"a\r\rb\r\n\nc\r");
        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["a", "", "b", "", "c"]);
    }

    #[tokio::test]
    async fn empty_file_has_no_lines() {
        let file = fixture(b"");
        let doc = read_document(file.path()).await.unwrap();
        assert!(doc.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_lines(&path).await.unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_read_error() {
        let file = fixture(&[0x66, 0x6f, 0xff, 0xfe, b'\n']);
        let err = read_lines(file.path()).await.unwrap_err();
        assert_eq!(err.source.kind(), std::io::ErrorKind::InvalidData);
    }
}

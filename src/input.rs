//! Reading header text from a file or stdin.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Read the whole input. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let bytes = std::fs::read(path).map_err(|source| AppError::Input {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(decode(bytes))
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| AppError::Input {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(decode(bytes))
        }
    }
}

/// Decode as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| {
        tracing::warn!(
            valid_up_to = err.utf8_error().valid_up_to(),
            "Input is not valid UTF-8; invalid bytes replaced"
        );
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_valid_utf8() {
        assert_eq!(decode(b"Accept: */*".to_vec()), "Accept: */*");
        assert_eq!(decode(Vec::new()), "");
    }

    #[test]
    fn test_decode_invalid_bytes_are_replaced() {
        assert_eq!(decode(b"X-A: 1\nX-B: \xff".to_vec()), "X-A: 1\nX-B: \u{FFFD}");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Host: h\nX-Bad: \xfe\xff\n").unwrap();

        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, "Host: h\nX-Bad: \u{FFFD}\u{FFFD}\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(dir.path().join("absent.txt").as_path())).unwrap_err();
        assert!(matches!(err, AppError::Input { .. }));
    }
}

//! Application error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures surfaced by the binary. Translation itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("cannot encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Input {
            path: PathBuf::from("headers.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read input headers.txt: not found");

        let err = AppError::from(ConfigError::Validation(Vec::new()));
        assert!(err.to_string().starts_with("configuration error: validation failed"));
    }
}

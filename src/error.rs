//! Typed errors for configuration loading.
//!
//! The config module returns [`ConfigError`] so callers can tell a syntax
//! problem apart from an unreadable file; command handlers at the CLI
//! boundary convert to [`anyhow::Error`] via the standard `?` operator.

use thiserror::Error;

/// Errors that arise from reading and parsing `tuckr.conf`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file contains a line that is neither a section header, a
    /// key-value pair, nor a comment.
    #[error("invalid syntax at line {line}: {message}")]
    Syntax {
        /// 1-based line number of the offending line.
        line: usize,
        /// Human-readable description of the problem.
        message: String,
    },

    /// An I/O error occurred while reading the config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn syntax_error_display() {
        let e = ConfigError::Syntax {
            line: 3,
            message: "expected `key = value`".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid syntax at line 3: expected `key = value`"
        );
    }

    #[test]
    fn io_error_display() {
        let e = ConfigError::Io {
            path: "tuckr.conf".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("tuckr.conf"));
        assert!(e.to_string().contains("IO error reading config file"));
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "tuckr.conf".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn converts_to_anyhow() {
        let e = ConfigError::Syntax {
            line: 1,
            message: "bad".to_string(),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn error_type_is_send_sync() {
        assert_send_sync::<ConfigError>();
    }
}

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read, parse or write one of the persisted documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The document is not valid YAML, or a value has the wrong type.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Underlying error.
        source: serde_yaml::Error,
    },

    /// The document is valid YAML but not the expected shape.
    #[error("malformed {}: {reason}", .path.display())]
    Malformed {
        /// Document path.
        path: PathBuf,
        /// What was wrong.
        reason: String,
    },
}

impl StoreError {
    pub(super) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(super) fn parse(path: &Path, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(super) fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    #[cfg(test)]
    pub(crate) const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Malformed { .. })
    }
}

//! Error types for `action-docs`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Why a single definition file could not be decoded.
///
/// Recoverable: callers that go through the lenient `parse` constructors
/// only see it as a warning.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file bytes are not UTF-8.
    #[error("definition is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The YAML reader rejected the content or a field had an unusable shape.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_saphyr::Error),
}

/// Errors that abort a documentation run.
#[derive(Debug, Error)]
pub enum ActionDocsError {
    /// Reading, listing or writing a path failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration layers could not be merged or extracted.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found at {0}")]
    MissingConfig(Utf8PathBuf),
}

impl ActionDocsError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for ActionDocsError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

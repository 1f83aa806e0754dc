//! Where per-file parse warnings go.
//!
//! Parsing never aborts on a malformed definition; it reports through a
//! [`WarningSink`] handed in by the caller and carries on with a zero-valued
//! model.

use std::sync::{Mutex, PoisonError};

use camino::{Utf8Path, Utf8PathBuf};

/// Receives non-fatal diagnostics about individual source files.
pub trait WarningSink {
    /// Records a warning about `source`.
    fn warn(&self, source: &Utf8Path, message: &str);
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, source: &Utf8Path, message: &str) {
        tracing::warn!(path = %source, "{message}");
    }
}

/// Keeps warnings in memory. Safe to share between threads.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<(Utf8PathBuf, String)>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings received so far, oldest first.
    #[must_use]
    pub fn warnings(&self) -> Vec<(Utf8PathBuf, String)> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, source: &Utf8Path, message: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((source.to_path_buf(), message.to_owned()));
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &S {
    fn warn(&self, source: &Utf8Path, message: &str) {
        (**self).warn(source, message);
    }
}

//! Error types shared by the quote library and the terminal client.
//!
//! The `QuoteError` enum unifies the failure cases of the widget: the two
//! remote failure classes that `QuoteProvider` absorbs into its fallback path
//! (`Network` and `Parse`), plus the ambient I/O, configuration and channel
//! errors that the client propagates out of `main`.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The remote request could not complete: connectivity, timeout or a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body is not well-formed or lacks the required fields.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while reading a tag list file into `Tag` values.
    #[error("Parse tags file error: {0}")]
    ParseTagsFile(String),

    /// A fallback pool must hold at least one quote.
    #[error("Fallback pool is empty")]
    EmptyFallbackPool,

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// The Ctrl+C handler could not be installed.
    #[error("Signal handler error: {0}")]
    Signal(String),
}

impl QuoteError {
    /// `true` for the failures of a remote fetch that trigger the fallback pool.
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, QuoteError::Network(_) | QuoteError::Parse(_))
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            QuoteError::Parse(err.to_string())
        } else {
            QuoteError::Network(err.to_string())
        }
    }
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_errors_are_parse_failures() {
        let err: QuoteError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, QuoteError::Parse(_)));
        assert!(err.is_remote_failure());
    }

    #[test]
    fn ambient_errors_are_not_remote_failures() {
        assert!(!QuoteError::Format("bad".into()).is_remote_failure());
        assert!(!QuoteError::EmptyFallbackPool.is_remote_failure());
    }
}

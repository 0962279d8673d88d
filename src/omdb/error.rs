//! Error types for movie lookups.
//!
//! Every variant falls into one of three kinds (transport, not found,
//! HTTP status). The UI collapses all of them into a single failed view,
//! but the kind and message survive in [`LookupFailure`] for diagnostics.

use thiserror::Error;

/// Errors that can occur while looking up a movie.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The title was empty, so no request was sent.
    #[error("Title must not be empty")]
    EmptyTitle,

    /// The request could not be sent or the body could not be read.
    #[error("Request for '{title}' failed: {source}")]
    Transport {
        title: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the expected JSON shape.
    #[error("Malformed response for '{title}': {source}")]
    Decode {
        title: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request succeeded but nothing matched.
    #[error("No match for '{title}': {reason}")]
    NotFound { title: String, reason: String },

    /// The server answered with a non-success status.
    #[error("Lookup for '{title}' returned HTTP {status}")]
    Http { title: String, status: u16 },

    /// The lookup worker is gone, so the request never left the UI.
    #[error("Lookup worker unavailable: {0}")]
    WorkerUnavailable(String),
}

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    Transport,
    NotFound,
    Http,
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Transport { .. }
            | LookupError::Decode { .. }
            | LookupError::WorkerUnavailable(_) => LookupErrorKind::Transport,
            // An empty title cannot match anything.
            LookupError::EmptyTitle | LookupError::NotFound { .. } => LookupErrorKind::NotFound,
            LookupError::Http { .. } => LookupErrorKind::Http,
        }
    }

    /// Stable identifier for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            LookupError::EmptyTitle => "empty_title",
            LookupError::Transport { .. } => "transport_error",
            LookupError::Decode { .. } => "decode_error",
            LookupError::NotFound { .. } => "not_found",
            LookupError::Http { .. } => "http_error",
            LookupError::WorkerUnavailable(_) => "worker_unavailable",
        }
    }

    /// Snapshot of this error that can live inside UI state.
    pub fn to_failure(&self) -> LookupFailure {
        LookupFailure {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Cloneable description of a failed lookup, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub kind: LookupErrorKind,
    pub message: String,
}

impl LookupFailure {
    pub fn new(kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kind_and_type() {
        let err = LookupError::NotFound {
            title: "Nope".to_string(),
            reason: "empty result list".to_string(),
        };
        assert_eq!(err.kind(), LookupErrorKind::NotFound);
        assert_eq!(err.error_type(), "not_found");
        assert_eq!(err.to_string(), "No match for 'Nope': empty result list");
    }

    #[test]
    fn http_kind_and_type() {
        let err = LookupError::Http {
            title: "Ironman".to_string(),
            status: 503,
        };
        assert_eq!(err.kind(), LookupErrorKind::Http);
        assert_eq!(err.error_type(), "http_error");
    }

    #[test]
    fn decode_is_a_transport_failure() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LookupError::Decode {
            title: "Ironman".to_string(),
            source,
        };
        assert_eq!(err.kind(), LookupErrorKind::Transport);
        assert_eq!(err.error_type(), "decode_error");
    }

    #[test]
    fn empty_title_counts_as_not_found() {
        assert_eq!(LookupError::EmptyTitle.kind(), LookupErrorKind::NotFound);
    }

    #[test]
    fn failure_keeps_kind_and_message() {
        let err = LookupError::Http {
            title: "The Hulk".to_string(),
            status: 401,
        };
        let failure = err.to_failure();
        assert_eq!(failure.kind, LookupErrorKind::Http);
        assert_eq!(failure.message, "Lookup for 'The Hulk' returned HTTP 401");
    }
}

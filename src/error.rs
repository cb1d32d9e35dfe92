//! Error kinds surfaced by the fetch operations.
//!
//! Every failure falls into one of three classes: the token was rejected,
//! the repository does not resolve, or the request failed in transit
//! (including rate limiting). Nothing is retried; errors propagate to the
//! command layer as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("github rejected the access token: {0}")]
    Authentication(String),

    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("github request failed: {0}")]
    Transport(#[source] octocrab::Error),
}

/// Classifies a GitHub error payload message into an error kind.
///
/// Returns `None` when the message matches neither the authentication nor
/// the not-found class, in which case the caller should treat the error as
/// a transport failure.
// TODO(#29): Refactor this brittle string matching.
// We should inspect the raw HTTP status code or use a strongly-typed error variant if available.
fn classify_message(message: &str) -> Option<FetchError> {
    let lowered = message.to_lowercase();
    if lowered.contains("bad credentials") || lowered.contains("requires authentication") {
        return Some(FetchError::Authentication(message.to_string()));
    }
    if lowered.contains("not found") {
        return Some(FetchError::NotFound(message.to_string()));
    }
    None
}

impl From<octocrab::Error> for FetchError {
    fn from(err: octocrab::Error) -> Self {
        if let octocrab::Error::GitHub { ref source, .. } = err {
            if let Some(classified) = classify_message(&source.message) {
                return classified;
            }
        }
        Self::Transport(err)
    }
}

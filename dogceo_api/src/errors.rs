//! Error types for the API client.

/// Errors that can occur when fetching sub-breeds.
///
/// Every failure (transport, HTTP status, empty body, malformed JSON,
/// non-success API status) collapses into [`Error::FetchFailed`]. Callers
/// cannot tell "breed not found" apart from a transient network failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sub-breed list could not be fetched or decoded.
    #[error("{0}")]
    FetchFailed(String),
}

impl Error {
    pub(crate) fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed(message.into())
    }
}

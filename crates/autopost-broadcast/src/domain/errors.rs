use thiserror::Error;

/// Faults a message send can raise.
///
/// A non-success HTTP status from the API is NOT one of these: the API was
/// reachable and answered, so that case is a recorded
/// [`crate::ApiReply`] with `ok: false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// No bot token configured; checked before any network call.
    #[error("missing bot token")]
    MissingCredential,

    /// The request never produced an API response (connect failure,
    /// timeout, client build error).
    #[error("request to messaging API failed: {0}")]
    Http(String),
}

use thiserror::Error;

/// Errors raised while parsing a signed payload.
///
/// These never escape [`crate::InitDataVerifier::verify`]; they exist so the
/// parser can state precisely why a payload is unverifiable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload carries no `hash` field, so there is nothing to check.
    #[error("payload has no hash field")]
    MissingHash,

    /// The payload carries more than one `hash` field.
    #[error("payload has multiple hash fields")]
    DuplicateHash,
}

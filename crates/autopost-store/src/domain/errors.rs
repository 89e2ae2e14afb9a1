use thiserror::Error;

/// Errors raised by the key-value port and its adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying I/O failed (file create, write, rename).
    #[error("store I/O error: {message}")]
    Io { message: String },

    /// A value could not be serialized for storage.
    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl StoreError {
    pub fn io(e: impl std::fmt::Display) -> Self {
        StoreError::Io {
            message: e.to_string(),
        }
    }

    pub fn serialization(e: impl std::fmt::Display) -> Self {
        StoreError::Serialization {
            message: e.to_string(),
        }
    }
}

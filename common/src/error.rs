use thiserror::Error;

/// Failure of one of the three backend operations.
///
/// The transport layer never lets an error escape to the page components;
/// every failure is delivered as a value and rendered as a toast. Schema
/// validation issues are *not* errors; they travel inside
/// [`crate::model::ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed: network failure, timeout, or a non-2xx
    /// status with no usable body.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered but flagged the operation as unsuccessful.
    /// Carries the human-readable message from the response envelope.
    #[error("{0}")]
    Rejected(String),
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

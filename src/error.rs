//! Error types for JSON encoding and decoding of sets.
//!
//! Extremal queries on an empty set are programming errors and panic
//! instead of returning one of these.

/// Represents a failure to move a [`Set`](crate::Set) to or from JSON.
///
/// # Examples
///
/// ```rust
/// use zeroset::{Set, SetError};
///
/// let error = Set::<i32>::from_json("42").unwrap_err();
/// assert!(matches!(error, SetError::Decode(_)));
/// assert!(error.to_string().starts_with("failed to decode set"));
/// ```
#[derive(Debug)]
pub enum SetError {
    /// An element could not be serialized.
    Encode(serde_json::Error),
    /// The input was malformed or was neither an array nor `null`.
    Decode(serde_json::Error),
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(error) => write!(formatter, "failed to encode set as JSON: {error}"),
            Self::Decode(error) => write!(formatter, "failed to decode set from JSON: {error}"),
        }
    }
}

impl std::error::Error for SetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(error) | Self::Decode(error) => Some(error),
        }
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenError>;

/// Failure kinds of the token codec.
///
/// Nothing here is transient: `OutOfRange` is an input error surfaced
/// verbatim to the caller, `MalformedToken` means the decode input is not
/// valid base64url of the expected byte length. The codec never retries
/// and never logs; surfacing is the caller's job.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("{field} out of range: got {value}, allowed {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("malformed token: {reason}")]
    MalformedToken { reason: String },
}

impl TokenError {
    /// Field name for `OutOfRange`, `None` otherwise. Handy in tests and
    /// for callers that map field errors back onto input widgets.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            TokenError::OutOfRange { field, .. } => Some(field),
            TokenError::MalformedToken { .. } => None,
        }
    }
}

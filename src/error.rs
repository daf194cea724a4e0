//! Error types for the adapters.

use thiserror::Error;

/// Raised whenever text cannot be turned back into an adapter value.
///
/// Decoding is all-or-nothing: when one of these is returned the target value
/// has not been touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The text does not match the configured pattern
    #[error("cannot parse {input:?} as a {kind} with format {format:?}: {source}")]
    Mismatch {
        kind: &'static str,
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },
    /// Raw text handed to the generic text hook is not UTF-8
    #[error("{kind} text is not valid UTF-8: {source}")]
    InvalidUtf8 {
        kind: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
    /// The parsed fields describe an instant chrono cannot represent
    #[error("{input:?} is out of range for a {kind}")]
    OutOfRange { kind: &'static str, input: String },
}

impl FormatError {
    /// Kind of adapter that failed to decode.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mismatch { kind, .. } | Self::InvalidUtf8 { kind, .. } | Self::OutOfRange { kind, .. } => *kind,
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, FormatError>;

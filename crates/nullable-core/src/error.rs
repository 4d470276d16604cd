//! Errors returned by the marshal hooks.
//!
//! Every error is an encoder or decoder failure from `serde_json`, passed
//! through unchanged. [`ErrorKind`] adds a stable `E####` code and a short
//! summary for terminal output.

use std::fmt;

/// Machine-readable classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Encode,
    Decode,
}

impl ErrorKind {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Encode => "E1001",
            Self::Decode => "E1002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Encode => "Payload could not be encoded",
            Self::Decode => "Payload could not be decoded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors surfaced by the tri-state marshal hooks.
///
/// Both variants wrap the `serde_json` error untouched; the container never
/// originates an error of its own.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload's own encoder failed.
    #[error(transparent)]
    Encode(serde_json::Error),

    /// Non-null input could not be parsed into the payload type.
    #[error(transparent)]
    Decode(serde_json::Error),
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Encode(_) => ErrorKind::Encode,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Borrow the underlying `serde_json` error.
    #[must_use]
    pub const fn inner(&self) -> &serde_json::Error {
        match self {
            Self::Encode(err) | Self::Decode(err) => err,
        }
    }

    /// Unwrap into the underlying `serde_json` error.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Error {
        match self {
            Self::Encode(err) | Self::Decode(err) => err,
        }
    }
}

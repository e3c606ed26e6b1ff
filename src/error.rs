//! Unified error type for txbuffer.
//!
//! Facade users see one error enum; the member-crate errors ride along as
//! sources so nothing about the failure is lost.

use thiserror::Error;
use txbuffer_codec::{CodecError, StreamError};
use txbuffer_core::InvalidLogPosition;

/// All txbuffer errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Cache boundary encode/decode failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Log position text could not be parsed.
    #[error(transparent)]
    Position(#[from] InvalidLogPosition),
}

/// Result type for txbuffer operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error came from the encode direction.
    pub fn is_encode(&self) -> bool {
        matches!(
            self,
            Error::Codec(CodecError::SerializationFailure { .. })
        )
    }

    /// Whether this error came from the decode direction.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Error::Codec(CodecError::DeserializationFailure { .. })
        )
    }

    /// Whether the input bytes were corrupt (as opposed to merely short).
    pub fn is_corrupt_input(&self) -> bool {
        match self {
            Error::Codec(err) => matches!(
                err.stream_error(),
                StreamError::CorruptLength { .. }
                    | StreamError::CorruptInstant { .. }
                    | StreamError::CorruptLogPosition { .. }
                    | StreamError::InvalidUtf8 { .. }
                    | StreamError::TrailingBytes { .. }
            ),
            Error::Position(_) => true,
        }
    }
}

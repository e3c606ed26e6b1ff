//! Entry codec template
//!
//! Every entity stored in the cache shares the same lifecycle and error
//! boundary and differs only in field layout. [`EntryCodec`] fixes that
//! split: implementors supply `write_fields`/`read_fields`, and the provided
//! `encode`/`decode` wrappers own the stream for the duration of the call,
//! translate stream failures into one error family per direction, and make
//! sure neither a partial payload nor a partial entity ever escapes.

use crate::stream::{EntryReader, EntryWriter, StreamError};
use thiserror::Error;
use tracing::{trace, warn};

/// Boundary errors for cache encode/decode operations.
///
/// Callers see exactly one error family per direction; the underlying
/// stream failure rides along as the source. Nothing is recovered locally:
/// a corrupt field has no usable fallback value, so every failure surfaces
/// to the cache/pipeline to decide whether to drop, log, or re-mine.
#[derive(Debug, Error)]
pub enum CodecError {
    /// An entity could not be encoded into cache bytes.
    #[error("failed to serialize {entity} entry")]
    SerializationFailure {
        /// Entity kind label of the failing codec.
        entity: &'static str,
        /// Underlying stream failure.
        #[source]
        source: StreamError,
    },

    /// Cache bytes could not be decoded back into an entity.
    #[error("failed to deserialize {entity} entry")]
    DeserializationFailure {
        /// Entity kind label of the failing codec.
        entity: &'static str,
        /// Underlying stream failure.
        #[source]
        source: StreamError,
    },
}

impl CodecError {
    /// Entity kind label the failing codec reported.
    pub fn entity(&self) -> &'static str {
        match self {
            CodecError::SerializationFailure { entity, .. } => entity,
            CodecError::DeserializationFailure { entity, .. } => entity,
        }
    }

    /// The underlying stream failure.
    pub fn stream_error(&self) -> &StreamError {
        match self {
            CodecError::SerializationFailure { source, .. } => source,
            CodecError::DeserializationFailure { source, .. } => source,
        }
    }
}

/// Template for a cache entry codec.
///
/// Implementors hold no state; a codec value is shared freely across the
/// cache's worker threads, and each `encode`/`decode` call owns its buffer
/// and stream for exactly the duration of the call.
pub trait EntryCodec {
    /// Entity type this codec persists.
    type Entry;

    /// Short entity label used in errors and logs.
    const ENTRY_KIND: &'static str;

    /// Write the entity's fields, in the fixed wire order.
    fn write_fields(&self, entry: &Self::Entry, writer: &mut EntryWriter)
        -> Result<(), StreamError>;

    /// Read the entity's fields, in the same fixed wire order.
    fn read_fields(&self, reader: &mut EntryReader<'_>) -> Result<Self::Entry, StreamError>;

    /// Encode an entity into cache bytes.
    ///
    /// The writer is scoped to this call. If `write_fields` fails partway,
    /// the partially written buffer is dropped with the writer and only the
    /// error escapes.
    fn encode(&self, entry: &Self::Entry) -> Result<Vec<u8>, CodecError> {
        let mut writer = EntryWriter::new();
        match self.write_fields(entry, &mut writer) {
            Ok(()) => {
                let bytes = writer.finish();
                trace!(entity = Self::ENTRY_KIND, len = bytes.len(), "encoded cache entry");
                Ok(bytes)
            }
            Err(source) => {
                warn!(entity = Self::ENTRY_KIND, error = %source, "entry serialization failed");
                Err(CodecError::SerializationFailure {
                    entity: Self::ENTRY_KIND,
                    source,
                })
            }
        }
    }

    /// Decode cache bytes back into an entity.
    ///
    /// The reader is scoped to this call. The fixed layout must consume the
    /// buffer exactly; trailing bytes mean the payload was not produced by
    /// the symmetric encode and are rejected rather than ignored.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Entry, CodecError> {
        let mut reader = EntryReader::new(bytes);
        let result = self.read_fields(&mut reader).and_then(|entry| {
            let remaining = reader.remaining();
            if remaining > 0 {
                Err(StreamError::TrailingBytes {
                    offset: reader.offset(),
                    remaining,
                })
            } else {
                Ok(entry)
            }
        });
        match result {
            Ok(entry) => {
                trace!(entity = Self::ENTRY_KIND, len = bytes.len(), "decoded cache entry");
                Ok(entry)
            }
            Err(source) => {
                warn!(entity = Self::ENTRY_KIND, error = %source, "entry deserialization failed");
                Err(CodecError::DeserializationFailure {
                    entity: Self::ENTRY_KIND,
                    source,
                })
            }
        }
    }
}

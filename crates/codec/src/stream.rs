//! Typed binary stream primitives
//!
//! [`EntryWriter`] and [`EntryReader`] provide the typed write/read protocol
//! over a byte buffer so entity codecs never touch raw bytes. Each operation
//! pair must be called in the same order on the encode and decode paths; the
//! stream validates byte shape only, never field semantics.
//!
//! ## Wire shapes
//!
//! | Primitive | Layout |
//! |-----------|--------|
//! | string | u32 big-endian byte length, then UTF-8 bytes |
//! | i32 | 4-byte two's-complement, big-endian |
//! | instant | i64 epoch seconds, then u32 nanosecond remainder |
//! | position | canonical decimal text (or `"null"`) via the string shape |
//!
//! The position rides as text because its magnitude is not bounded by any
//! native integer width.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use chrono::{DateTime, LocalResult, TimeZone, Utc};
use std::io::{Cursor, Read};
use thiserror::Error;
use txbuffer_core::position::{InvalidLogPosition, LogPosition};

/// Byte-shape errors raised by the stream primitives.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Buffer ended before the field it declares.
    #[error("input truncated at offset {offset}: need {needed} bytes, have {have}")]
    TruncatedInput {
        /// Byte offset the read started at.
        offset: usize,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes actually remaining.
        have: usize,
    },

    /// Length prefix inconsistent with the remaining buffer size.
    #[error("corrupt length prefix at offset {offset}: {length} bytes declared, {remaining} remain")]
    CorruptLength {
        /// Byte offset of the length prefix.
        offset: usize,
        /// Declared payload length.
        length: u32,
        /// Bytes remaining after the prefix.
        remaining: usize,
    },

    /// String payload bytes are not valid UTF-8.
    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 {
        /// Byte offset of the string payload.
        offset: usize,
    },

    /// Decoded seconds/nanos pair does not name a representable instant.
    #[error("corrupt instant: {seconds}s + {nanos}ns is not a valid time")]
    CorruptInstant {
        /// Decoded epoch seconds.
        seconds: i64,
        /// Decoded nanosecond remainder.
        nanos: u32,
    },

    /// Non-sentinel position text that failed the numeric parse.
    #[error("corrupt log position at offset {offset}")]
    CorruptLogPosition {
        /// Byte offset of the position text payload.
        offset: usize,
        /// The underlying parse failure, carrying the rejected text.
        #[source]
        source: InvalidLogPosition,
    },

    /// String payload too large for the u32 length prefix.
    #[error("string of {length} bytes exceeds the length-prefix range")]
    OversizeString {
        /// Byte length of the rejected string.
        length: usize,
    },

    /// Bytes left over after a fixed layout consumed all its fields.
    #[error("{remaining} trailing bytes after entry at offset {offset}")]
    TrailingBytes {
        /// Offset where decoding stopped.
        offset: usize,
        /// Unconsumed byte count.
        remaining: usize,
    },

    /// Underlying buffer write failure.
    #[error("stream I/O error")]
    Io(#[from] std::io::Error),
}

/// Typed writer over a growable byte buffer.
///
/// Owned by a single encode call; [`EntryWriter::finish`] surrenders the
/// buffer. Dropping the writer without finishing discards all bytes, so a
/// failed encode can never leak a partial payload.
#[derive(Debug, Default)]
pub struct EntryWriter {
    buf: Vec<u8>,
}

impl EntryWriter {
    /// Empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) -> Result<(), StreamError> {
        let length = u32::try_from(value.len()).map_err(|_| StreamError::OversizeString {
            length: value.len(),
        })?;
        self.buf.write_u32::<BigEndian>(length)?;
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    /// Fixed 4-byte big-endian two's-complement integer.
    pub fn write_i32(&mut self, value: i32) -> Result<(), StreamError> {
        self.buf.write_i32::<BigEndian>(value)?;
        Ok(())
    }

    /// Instant as epoch seconds plus nanosecond remainder.
    pub fn write_instant(&mut self, value: DateTime<Utc>) -> Result<(), StreamError> {
        self.buf.write_i64::<BigEndian>(value.timestamp())?;
        self.buf.write_u32::<BigEndian>(value.timestamp_subsec_nanos())?;
        Ok(())
    }

    /// Log position as canonical text, `"null"` when unset.
    pub fn write_position(&mut self, value: &LogPosition) -> Result<(), StreamError> {
        self.write_string(&value.to_text())
    }

    /// Consume the writer and return the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Typed reader over a borrowed byte buffer.
///
/// Owned by a single decode call. Reads advance a cursor; reading past the
/// end fails with [`StreamError::TruncatedInput`].
#[derive(Debug)]
pub struct EntryReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> EntryReader<'a> {
    /// Reader positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    /// Current byte offset into the buffer.
    pub fn offset(&self) -> usize {
        self.cursor.position() as usize
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.offset())
    }

    fn read_u32_raw(&mut self) -> Result<u32, StreamError> {
        let offset = self.offset();
        let have = self.remaining();
        self.cursor
            .read_u32::<BigEndian>()
            .map_err(|_| StreamError::TruncatedInput {
                offset,
                needed: 4,
                have,
            })
    }

    fn read_i64_raw(&mut self) -> Result<i64, StreamError> {
        let offset = self.offset();
        let have = self.remaining();
        self.cursor
            .read_i64::<BigEndian>()
            .map_err(|_| StreamError::TruncatedInput {
                offset,
                needed: 8,
                have,
            })
    }

    /// Length-prefixed UTF-8 string. A zero length yields an empty string.
    pub fn read_string(&mut self) -> Result<String, StreamError> {
        let prefix_offset = self.offset();
        let length = self.read_u32_raw()?;
        let payload_offset = self.offset();
        let remaining = self.remaining();
        if length as usize > remaining {
            return Err(StreamError::CorruptLength {
                offset: prefix_offset,
                length,
                remaining,
            });
        }
        if length == 0 {
            return Ok(String::new());
        }
        let mut bytes = vec![0u8; length as usize];
        self.cursor
            .read_exact(&mut bytes)
            .map_err(|_| StreamError::TruncatedInput {
                offset: payload_offset,
                needed: length as usize,
                have: remaining,
            })?;
        String::from_utf8(bytes).map_err(|_| StreamError::InvalidUtf8 {
            offset: payload_offset,
        })
    }

    /// Fixed 4-byte big-endian two's-complement integer.
    pub fn read_i32(&mut self) -> Result<i32, StreamError> {
        let offset = self.offset();
        let have = self.remaining();
        self.cursor
            .read_i32::<BigEndian>()
            .map_err(|_| StreamError::TruncatedInput {
                offset,
                needed: 4,
                have,
            })
    }

    /// Instant from epoch seconds plus nanosecond remainder.
    pub fn read_instant(&mut self) -> Result<DateTime<Utc>, StreamError> {
        let seconds = self.read_i64_raw()?;
        let nanos = self.read_u32_raw()?;
        match Utc.timestamp_opt(seconds, nanos) {
            LocalResult::Single(value) => Ok(value),
            _ => Err(StreamError::CorruptInstant { seconds, nanos }),
        }
    }

    /// Log position from its text form. The `"null"` sentinel is checked
    /// before any numeric parse; other non-numeric text is an error, never
    /// coerced to zero.
    pub fn read_position(&mut self) -> Result<LogPosition, StreamError> {
        let payload_offset = self.offset();
        let text = self.read_string()?;
        LogPosition::from_text(&text).map_err(|source| StreamError::CorruptLogPosition {
            offset: payload_offset,
            source,
        })
    }
}

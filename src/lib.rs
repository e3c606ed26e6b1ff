//! # txbuffer
//!
//! Spill codec for in-flight transaction buffers in log-based change data
//! capture.
//!
//! When a source database emits changes faster than they can be committed
//! downstream, the CDC engine holds partially-assembled transactions outside
//! of process heap memory, in a pluggable cache that may spill to disk or
//! evict under pressure. This crate is the contract between the in-memory
//! transaction representation and that cache's opaque byte storage.
//!
//! ## Quick Start
//!
//! ```
//! use txbuffer::prelude::*;
//! use chrono::Utc;
//!
//! # fn main() -> txbuffer::Result<()> {
//! let entry = TransactionEntry::started(
//!     "02000b00215e1a00",
//!     LogPosition::from(8_675_309u64),
//!     Utc::now(),
//!     Some("app_user".to_string()),
//!     1,
//!     None,
//! );
//!
//! // The cache calls these two entry points; it never sees field layout.
//! let bytes = TransactionEntryCodec.encode(&entry)?;
//! let restored = TransactionEntryCodec.decode(&bytes)?;
//! assert_eq!(restored.transaction_id(), "02000b00215e1a00");
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! - [`txbuffer_core`] types ([`TransactionEntry`], [`LogPosition`], the
//!   [`RecordEnvelope`] contract) - what is stored
//! - [`txbuffer_codec`] ([`EntryCodec`], [`TransactionEntryCodec`], the
//!   typed stream primitives) - how it is laid out in bytes
//!
//! The codec holds no shared state: every encode/decode call owns its
//! buffer and stream, so the surrounding cache may invoke it from any
//! number of worker threads without locking.

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

// Entity model
pub use txbuffer_core::{
    FieldValue, InvalidLogPosition, LogPosition, Record, RecordEnvelope, RecordSchema,
    TransactionEntry,
};

// Cache boundary
pub use txbuffer_codec::{
    CodecError, EntryCodec, EntryReader, EntryWriter, StreamError, TransactionEntryCodec,
};

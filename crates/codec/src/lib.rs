//! Cache boundary codecs for transaction buffer entries
//!
//! This crate is the contract between the in-memory entity model and the
//! external cache's opaque byte storage. It has three layers:
//!
//! - [`stream`] - typed primitive write/read pairs (string, i32, instant,
//!   log position) over a single contiguous byte buffer
//! - [`entry`] - the [`EntryCodec`] template: concrete codecs supply field
//!   layout, the provided `encode`/`decode` wrappers own buffer lifecycle
//!   and the uniform error boundary
//! - [`transaction`] - the concrete seven-field transaction entry layout
//!
//! The layout is fixed-order and version-less: writes and reads must occur
//! in exactly the same order on the two sides, and a decode failure is
//! always surfaced, never patched over with a default value.
//!
//! Every call owns its buffer and stream; the codecs are stateless and may
//! be invoked concurrently from as many threads as the surrounding cache
//! permits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod stream;
pub mod transaction;

pub use entry::{CodecError, EntryCodec};
pub use stream::{EntryReader, EntryWriter, StreamError};
pub use transaction::TransactionEntryCodec;

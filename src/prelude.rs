//! Convenient imports for txbuffer.
//!
//! Re-exports the types most callers need so the cache boundary can be
//! wired with a single import:
//!
//! ```
//! use txbuffer::prelude::*;
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Entity model
pub use crate::{LogPosition, TransactionEntry};

// Cache boundary
pub use crate::{EntryCodec, TransactionEntryCodec};

// Downstream record contract
pub use crate::{RecordEnvelope, RecordSchema};

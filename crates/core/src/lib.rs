//! Entity model for in-flight CDC transaction buffers
//!
//! This crate defines the types that the spill codec persists into the
//! external cache and restores from it:
//!
//! - [`LogPosition`] - monotonic logical clock over the source change log,
//!   with a distinguished unset state that sorts before every numeric value
//! - [`TransactionEntry`] - one in-flight source transaction awaiting commit
//! - [`RecordEnvelope`] - the contract downstream record publishing consumes
//!   to turn an entity into an identified, schema-tagged record
//!
//! Nothing in this crate touches bytes on the wire; the binary layout lives
//! in the codec crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod position;
pub mod transaction;

pub use envelope::{FieldValue, Record, RecordEnvelope, RecordSchema};
pub use position::{InvalidLogPosition, LogPosition};
pub use transaction::TransactionEntry;

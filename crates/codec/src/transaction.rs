//! Transaction entry codec
//!
//! Concrete wire layout for a [`TransactionEntry`]. Seven fields, fixed
//! order, no version byte:
//!
//! 1. `transaction_id` - string
//! 2. `start_position` - log position (text, `"null"` when unset)
//! 3. `change_time` - instant
//! 4. `user_name` - string (empty when absent)
//! 5. `redo_thread_id` - i32
//! 6. `event_count` - i32
//! 7. `client_id` - string (empty when absent)
//!
//! Absent user/client identity collapses to the empty string on the wire,
//! and decodes back as a present empty string; the layout has no way to
//! tell the two apart, and the entity model keeps legitimate empty strings
//! distinct everywhere else.

use crate::entry::EntryCodec;
use crate::stream::{EntryReader, EntryWriter, StreamError};
use txbuffer_core::transaction::TransactionEntry;

/// Codec for [`TransactionEntry`] cache values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionEntryCodec;

impl EntryCodec for TransactionEntryCodec {
    type Entry = TransactionEntry;

    const ENTRY_KIND: &'static str = "transaction";

    fn write_fields(
        &self,
        entry: &TransactionEntry,
        writer: &mut EntryWriter,
    ) -> Result<(), StreamError> {
        writer.write_string(entry.transaction_id())?;
        writer.write_position(entry.start_position())?;
        writer.write_instant(entry.change_time())?;
        writer.write_string(entry.user_name().unwrap_or(""))?;
        writer.write_i32(entry.redo_thread_id())?;
        writer.write_i32(entry.event_count())?;
        writer.write_string(entry.client_id().unwrap_or(""))?;
        Ok(())
    }

    fn read_fields(&self, reader: &mut EntryReader<'_>) -> Result<TransactionEntry, StreamError> {
        let transaction_id = reader.read_string()?;
        let start_position = reader.read_position()?;
        let change_time = reader.read_instant()?;
        let user_name = reader.read_string()?;
        let redo_thread_id = reader.read_i32()?;
        let event_count = reader.read_i32()?;
        let client_id = reader.read_string()?;
        Ok(TransactionEntry::new(
            transaction_id,
            start_position,
            change_time,
            Some(user_name),
            redo_thread_id,
            event_count,
            Some(client_id),
        ))
    }
}

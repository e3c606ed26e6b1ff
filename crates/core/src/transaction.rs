//! In-flight transaction buffer entries
//!
//! A [`TransactionEntry`] is the in-memory/in-cache representation of one
//! source transaction that has not yet fully committed downstream. The
//! assembly pipeline creates an entry when a transaction's first event is
//! observed, re-persists it into the cache as further events arrive, and
//! removes it when the transaction commits, aborts, or is evicted by the
//! cache's own policy.
//!
//! `event_count` is monotonically non-decreasing while the entry is open:
//! the only mutator is [`TransactionEntry::record_event`], which increments.

use crate::position::LogPosition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One in-flight source transaction awaiting commit.
///
/// The seven fields below are exactly the fields the cache codec persists,
/// in a fixed, version-less wire order. `user_name` and `client_id` may be
/// absent; absence is collapsed to the empty-string sentinel at the wire
/// boundary, never inside this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    transaction_id: String,
    start_position: LogPosition,
    change_time: DateTime<Utc>,
    user_name: Option<String>,
    redo_thread_id: i32,
    event_count: i32,
    client_id: Option<String>,
}

impl TransactionEntry {
    /// Reconstruct an entry from all seven fields.
    ///
    /// Used by the cache codec on decode; `event_count` is taken as-is.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transaction_id: impl Into<String>,
        start_position: LogPosition,
        change_time: DateTime<Utc>,
        user_name: Option<String>,
        redo_thread_id: i32,
        event_count: i32,
        client_id: Option<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            start_position,
            change_time,
            user_name,
            redo_thread_id,
            event_count,
            client_id,
        }
    }

    /// Entry for a newly observed transaction, before any event is buffered.
    pub fn started(
        transaction_id: impl Into<String>,
        start_position: LogPosition,
        change_time: DateTime<Utc>,
        user_name: Option<String>,
        redo_thread_id: i32,
        client_id: Option<String>,
    ) -> Self {
        Self::new(
            transaction_id,
            start_position,
            change_time,
            user_name,
            redo_thread_id,
            0,
            client_id,
        )
    }

    /// Source-assigned transaction identifier. Immutable once created.
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Log position at which the transaction began; may be unset.
    pub fn start_position(&self) -> &LogPosition {
        &self.start_position
    }

    /// Wall-clock time of the most recent observed event.
    pub fn change_time(&self) -> DateTime<Utc> {
        self.change_time
    }

    /// Session/user identity that issued the transaction, if known.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Parallel redo stream that produced this transaction.
    pub fn redo_thread_id(&self) -> i32 {
        self.redo_thread_id
    }

    /// Count of events buffered so far for this transaction.
    pub fn event_count(&self) -> i32 {
        self.event_count
    }

    /// Client-supplied correlation identifier, if any.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Index the next buffered event will receive.
    pub fn next_event_id(&self) -> i32 {
        self.event_count
    }

    /// Note one more buffered event: bumps the count and advances the
    /// change time to the event's time.
    pub fn record_event(&mut self, change_time: DateTime<Utc>) {
        self.event_count += 1;
        self.change_time = change_time;
    }
}

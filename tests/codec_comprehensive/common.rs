//! Shared helpers for the codec integration suite.

use chrono::{DateTime, TimeZone, Utc};
use txbuffer::{LogPosition, TransactionEntry};

/// Route codec tracing output through the test harness capture.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

pub fn change_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_722_470_400, 250_000_000).unwrap()
}

/// A fully populated entry with a distinct value in every field.
pub fn sample_entry() -> TransactionEntry {
    TransactionEntry::new(
        "02000b00215e1a00",
        LogPosition::from(8_675_309u64),
        change_time(),
        Some("app_user".to_string()),
        1,
        17,
        Some("batch-42".to_string()),
    )
}

/// An entry whose identity fields vary with `seed`, for concurrency tests.
pub fn entry_for_seed(seed: i32) -> TransactionEntry {
    TransactionEntry::new(
        format!("tx-{seed:08x}"),
        LogPosition::from(1_000u64 + seed as u64),
        change_time() + chrono::Duration::milliseconds(i64::from(seed)),
        Some(format!("user-{seed}")),
        seed % 4,
        seed,
        Some(format!("client-{seed}")),
    )
}

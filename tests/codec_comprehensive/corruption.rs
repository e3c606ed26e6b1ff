//! Corrupt and truncated input must surface errors, never wrong entries.

use crate::common::{init_tracing, sample_entry};
use txbuffer::{CodecError, EntryCodec, EntryWriter, StreamError, TransactionEntryCodec};

#[test]
fn every_truncation_point_fails_cleanly() {
    init_tracing();
    let bytes = TransactionEntryCodec.encode(&sample_entry()).unwrap();
    for cut in 0..bytes.len() {
        match TransactionEntryCodec.decode(&bytes[..cut]) {
            Err(CodecError::DeserializationFailure { entity, .. }) => {
                assert_eq!(entity, "transaction");
            }
            Err(other) => panic!("unexpected error family at cut {cut}: {other:?}"),
            Ok(_) => panic!("prefix of {cut} bytes decoded to an entry"),
        }
    }
}

#[test]
fn truncation_mid_payload_reports_the_length_mismatch() {
    let bytes = TransactionEntryCodec.encode(&sample_entry()).unwrap();
    // Cut inside the transaction_id payload: the prefix declares more
    // bytes than remain.
    let err = TransactionEntryCodec.decode(&bytes[..6]).unwrap_err();
    assert!(matches!(
        err.stream_error(),
        StreamError::CorruptLength { .. }
    ));
}

#[test]
fn truncation_inside_length_prefix_is_truncated_input() {
    let bytes = TransactionEntryCodec.encode(&sample_entry()).unwrap();
    let err = TransactionEntryCodec.decode(&bytes[..2]).unwrap_err();
    assert!(matches!(
        err.stream_error(),
        StreamError::TruncatedInput { needed: 4, have: 2, .. }
    ));
}

#[test]
fn swapped_field_order_is_detected_not_accepted() {
    // Simulated corruption: the writer emits the redo thread id where the
    // decoder expects the transaction_id string. The integer bytes get
    // interpreted as a length prefix that cannot fit the buffer.
    let mut writer = EntryWriter::new();
    writer.write_i32(i32::MAX).unwrap();
    writer.write_string("02000b00215e1a00").unwrap();

    let err = TransactionEntryCodec.decode(&writer.finish()).unwrap_err();
    assert!(matches!(
        err.stream_error(),
        StreamError::CorruptLength { .. }
    ));
}

#[test]
fn garbage_position_text_is_an_error_not_zero() {
    let mut writer = EntryWriter::new();
    writer.write_string("tx-1").unwrap();
    writer.write_string("not-a-position").unwrap();

    let err = TransactionEntryCodec.decode(&writer.finish()).unwrap_err();
    match err.stream_error() {
        StreamError::CorruptLogPosition { source, .. } => {
            assert_eq!(source.text, "not-a-position");
        }
        other => panic!("expected CorruptLogPosition, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_after_a_full_entry_are_rejected() {
    let mut bytes = TransactionEntryCodec.encode(&sample_entry()).unwrap();
    bytes.extend_from_slice(&[0xde, 0xad]);

    let err = TransactionEntryCodec.decode(&bytes).unwrap_err();
    assert!(matches!(
        err.stream_error(),
        StreamError::TrailingBytes { remaining: 2, .. }
    ));
}

#[test]
fn empty_buffer_never_decodes() {
    let err = TransactionEntryCodec.decode(&[]).unwrap_err();
    assert!(matches!(
        err.stream_error(),
        StreamError::TruncatedInput { offset: 0, .. }
    ));
}

#[test]
fn facade_error_classifies_corruption() {
    let mut bytes = TransactionEntryCodec.encode(&sample_entry()).unwrap();
    bytes.push(0);
    let err: txbuffer::Error = TransactionEntryCodec.decode(&bytes).unwrap_err().into();
    assert!(err.is_decode());
    assert!(!err.is_encode());
    assert!(err.is_corrupt_input());

    let short = TransactionEntryCodec.decode(&[0u8; 2]).unwrap_err();
    let err: txbuffer::Error = short.into();
    assert!(err.is_decode());
    // Short input is truncation, not corruption.
    assert!(!err.is_corrupt_input());
}

//! Concurrent encode/decode across worker threads.
//!
//! The codec holds no shared mutable state; N threads working on N
//! distinct entries must each get exactly their own entry back.

use crate::common::entry_for_seed;
use std::thread;
use txbuffer::{EntryCodec, TransactionEntryCodec};

#[test]
fn concurrent_roundtrips_do_not_interfere() {
    let threads = 8;
    let iterations = 64;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..iterations {
                    let entry = entry_for_seed(t * iterations + i);
                    let bytes = TransactionEntryCodec.encode(&entry).unwrap();
                    let decoded = TransactionEntryCodec.decode(&bytes).unwrap();
                    assert_eq!(decoded, entry);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn one_shared_codec_value_serves_all_threads() {
    // Zero-sized and stateless: the same codec value crosses threads.
    let codec = TransactionEntryCodec;

    let encoded: Vec<_> = (0..16)
        .map(|seed| {
            let entry = entry_for_seed(seed);
            (entry.clone(), codec.encode(&entry).unwrap())
        })
        .collect();

    let handles: Vec<_> = encoded
        .into_iter()
        .map(|(entry, bytes)| {
            thread::spawn(move || {
                let decoded = codec.decode(&bytes).unwrap();
                assert_eq!(decoded, entry);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn interleaved_encodes_produce_independent_buffers() {
    let a = entry_for_seed(1);
    let b = entry_for_seed(2);

    let bytes_a = TransactionEntryCodec.encode(&a).unwrap();
    let bytes_b = TransactionEntryCodec.encode(&b).unwrap();

    assert_ne!(bytes_a, bytes_b);
    assert_eq!(TransactionEntryCodec.decode(&bytes_a).unwrap(), a);
    assert_eq!(TransactionEntryCodec.decode(&bytes_b).unwrap(), b);
}

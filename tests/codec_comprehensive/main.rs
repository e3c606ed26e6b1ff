//! Codec Integration Tests
//!
//! End-to-end tests for the cache boundary: round-trip fidelity,
//! corruption surfacing, and concurrent use.

mod common;

mod concurrency;
mod corruption;

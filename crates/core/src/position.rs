//! Log position values
//!
//! A [`LogPosition`] is a monotonic logical clock over the source system's
//! change/redo log. Values are totally ordered and can exceed native 64-bit
//! range, so the magnitude is held as an arbitrary-precision integer. One
//! distinguished unset state exists, distinct from numeric zero, and sorts
//! before every numeric value.
//!
//! ## Canonical text
//!
//! Every position has exactly one text rendering: the decimal digits of its
//! magnitude, or the literal `"null"` for the unset state. [`LogPosition::from_text`]
//! is the inverse and rejects everything else, so the sentinel can never
//! collide with a legitimate numeric rendering.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text sentinel for the unset position on the wire.
pub const UNSET_POSITION_TEXT: &str = "null";

/// Error for text that is neither the unset sentinel nor decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log position text: {text:?}")]
pub struct InvalidLogPosition {
    /// The rejected input text.
    pub text: String,
}

/// A position within the source system's change/redo log.
///
/// Positions are totally ordered: `Unset` compares less than every numeric
/// value, and numeric values compare by magnitude (never by text, which is
/// not length-normalized).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogPosition {
    /// The distinguished "not yet known" state. Not the same as zero.
    Unset,
    /// A concrete position; magnitude is unbounded.
    Value(BigUint),
}

impl LogPosition {
    /// Whether this is the distinguished unset state.
    pub fn is_unset(&self) -> bool {
        matches!(self, LogPosition::Unset)
    }

    /// Canonical text form: decimal digits, or `"null"` when unset.
    pub fn to_text(&self) -> String {
        match self {
            LogPosition::Unset => UNSET_POSITION_TEXT.to_string(),
            LogPosition::Value(value) => value.to_str_radix(10),
        }
    }

    /// Parse the canonical text form.
    ///
    /// The sentinel is checked before any numeric parse. Numeric text must
    /// be non-empty ASCII decimal digits; anything else (signs, whitespace,
    /// hex, empty input) fails with [`InvalidLogPosition`].
    pub fn from_text(text: &str) -> Result<Self, InvalidLogPosition> {
        if text == UNSET_POSITION_TEXT {
            return Ok(LogPosition::Unset);
        }
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidLogPosition {
                text: text.to_string(),
            });
        }
        let value = BigUint::parse_bytes(text.as_bytes(), 10).ok_or_else(|| InvalidLogPosition {
            text: text.to_string(),
        })?;
        Ok(LogPosition::Value(value))
    }
}

impl From<u64> for LogPosition {
    fn from(value: u64) -> Self {
        LogPosition::Value(BigUint::from(value))
    }
}

impl From<BigUint> for LogPosition {
    fn from(value: BigUint) -> Self {
        LogPosition::Value(value)
    }
}

impl Ord for LogPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (LogPosition::Unset, LogPosition::Unset) => Ordering::Equal,
            (LogPosition::Unset, LogPosition::Value(_)) => Ordering::Less,
            (LogPosition::Value(_), LogPosition::Unset) => Ordering::Greater,
            (LogPosition::Value(a), LogPosition::Value(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for LogPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LogPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for LogPosition {
    type Err = InvalidLogPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogPosition::from_text(s)
    }
}

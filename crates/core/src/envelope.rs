//! Downstream record envelope contract
//!
//! Downstream record publishing does not consume cache bytes; it consumes a
//! structured view of an entity. [`RecordEnvelope`] is that contract: an
//! identity, a type tag, source metadata, an operation tag, an optional
//! transaction block, a schema-tagged timestamp, and a data payload whose
//! fields are selected by the caller.
//!
//! The value model here ([`FieldValue`], [`Record`], [`RecordSchema`]) is
//! deliberately small: envelope fields are scalars, and field order matters
//! for schema stability, so a `Record` keeps its fields in insertion order.

use crate::position::LogPosition;
use crate::transaction::TransactionEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A scalar envelope field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// UTF-8 string.
    String(String),
}

impl FieldValue {
    /// Type name for error messages and schema rendering.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "Null",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Int(_) => "Int",
            FieldValue::String(_) => "String",
        }
    }

    /// Whether this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Try to get as i64.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(value) => Some(value),
            _ => None,
        }
    }
}

/// An ordered, named collection of envelope fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder-style.
    pub fn with(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A named schema: which fields a record carries, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    name: String,
    fields: Vec<String>,
}

impl RecordSchema {
    /// Schema with the given name and ordered field names.
    pub fn new(name: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            name: name.into(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
        }
    }

    /// Schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered field names.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Contract for producing a publishable record view of an entity.
///
/// Consumed by downstream record publishing, not by the cache codec. The
/// data schema and payload are parameterized by which fields the caller
/// wants; unknown field names are filtered out, not errors.
pub trait RecordEnvelope {
    /// Identity string for the record.
    fn id(&self) -> String;

    /// Entity type tag.
    fn type_tag(&self) -> &'static str;

    /// Structured source/session metadata.
    fn source(&self) -> Record;

    /// Operation tag for the record.
    fn operation(&self) -> &'static str;

    /// Structured transaction block, when the entity has one.
    fn transaction_block(&self) -> Option<Record>;

    /// Timestamp value with its associated schema.
    fn timestamp(&self) -> (RecordSchema, DateTime<Utc>);

    /// Trace-correlation identifier, when one was captured.
    fn trace_parent(&self) -> Option<String>;

    /// Name of the data schema.
    fn data_schema_name(&self) -> String;

    /// Data schema restricted to the requested fields.
    fn data_schema(&self, data_fields: &[&str]) -> RecordSchema;

    /// Data payload restricted to the requested fields.
    fn data(&self, data_fields: &[&str]) -> Record;

    /// Connector-type tag of the producing source.
    fn connector_type(&self) -> &'static str;

    /// Source-specific field lookup, filtered by an allow-set of names.
    fn source_field(&self, name: &str, allowed: &HashSet<String>) -> Option<FieldValue>;
}

/// Data field names a [`TransactionEntry`] can expose.
pub const TRANSACTION_DATA_FIELDS: [&str; 7] = [
    "transaction_id",
    "start_position",
    "change_time",
    "user_name",
    "redo_thread_id",
    "event_count",
    "client_id",
];

fn optional_string(value: Option<&str>) -> FieldValue {
    match value {
        Some(text) => FieldValue::String(text.to_string()),
        None => FieldValue::Null,
    }
}

fn position_text(position: &LogPosition) -> FieldValue {
    FieldValue::String(position.to_text())
}

impl TransactionEntry {
    fn data_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "transaction_id" => Some(FieldValue::String(self.transaction_id().to_string())),
            "start_position" => Some(position_text(self.start_position())),
            "change_time" => Some(FieldValue::Int(self.change_time().timestamp_millis())),
            "user_name" => Some(optional_string(self.user_name())),
            "redo_thread_id" => Some(FieldValue::Int(i64::from(self.redo_thread_id()))),
            "event_count" => Some(FieldValue::Int(i64::from(self.event_count()))),
            "client_id" => Some(optional_string(self.client_id())),
            _ => None,
        }
    }
}

impl RecordEnvelope for TransactionEntry {
    fn id(&self) -> String {
        self.transaction_id().to_string()
    }

    fn type_tag(&self) -> &'static str {
        "transaction"
    }

    fn source(&self) -> Record {
        Record::new()
            .with("user_name", optional_string(self.user_name()))
            .with("redo_thread_id", FieldValue::Int(i64::from(self.redo_thread_id())))
            .with("client_id", optional_string(self.client_id()))
            .with("start_position", position_text(self.start_position()))
    }

    fn operation(&self) -> &'static str {
        // A buffered entry always represents a transaction that has begun
        // but not yet committed downstream.
        "begin"
    }

    fn transaction_block(&self) -> Option<Record> {
        Some(
            Record::new()
                .with("id", FieldValue::String(self.transaction_id().to_string()))
                .with("event_count", FieldValue::Int(i64::from(self.event_count()))),
        )
    }

    fn timestamp(&self) -> (RecordSchema, DateTime<Utc>) {
        (
            RecordSchema::new("ChangeTime", &["seconds", "nanos"]),
            self.change_time(),
        )
    }

    fn trace_parent(&self) -> Option<String> {
        None
    }

    fn data_schema_name(&self) -> String {
        "TransactionBufferEntry".to_string()
    }

    fn data_schema(&self, data_fields: &[&str]) -> RecordSchema {
        let known: Vec<&str> = data_fields
            .iter()
            .copied()
            .filter(|name| TRANSACTION_DATA_FIELDS.contains(name))
            .collect();
        RecordSchema::new(self.data_schema_name(), &known)
    }

    fn data(&self, data_fields: &[&str]) -> Record {
        let mut record = Record::new();
        for name in data_fields {
            if let Some(value) = self.data_field(name) {
                record = record.with(*name, value);
            }
        }
        record
    }

    fn connector_type(&self) -> &'static str {
        "logminer"
    }

    fn source_field(&self, name: &str, allowed: &HashSet<String>) -> Option<FieldValue> {
        if !allowed.contains(name) {
            return None;
        }
        self.source().get(name).cloned()
    }
}

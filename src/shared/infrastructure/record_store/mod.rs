// Record store port: a remote document database holding one document per record.
//
// Purpose
// - Describe what the attendance core needs from the document store, without implementing it.
//
// Boundaries
// - Writes can only carry text values or the server timestamp sentinel. There is no way to write a
//   caller-chosen timestamp through this port.
// - Adapters implement the trait; `in_memory` backs tests and local development.

use crate::shared::core::primitives::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store write failed: {0}")]
    Write(String),

    #[error("record {id} not found in {collection}")]
    NotFound { collection: String, id: RecordId },

    #[error("store read failed: {0}")]
    Read(String),
}

/// A value as sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteValue {
    Text(String),
    /// Replaced by the store's own clock at write time.
    ServerTimestamp,
}

pub type WriteFields = BTreeMap<String, WriteValue>;

/// A value as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StoredValue {
    Text(String),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: RecordId,
    pub fields: BTreeMap<String, StoredValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Equals { field: String, value: String },
    Missing { field: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push(Condition::Equals {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn missing(mut self, field: impl Into<String>) -> Self {
        self.conditions.push(Condition::Missing {
            field: field.into(),
        });
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|condition| match condition {
            Condition::Equals { field, value } => matches!(
                document.fields.get(field),
                Some(StoredValue::Text(text)) if text == value
            ),
            Condition::Missing { field } => !document.fields.contains_key(field),
        })
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, collection: &str, fields: WriteFields) -> Result<RecordId, StoreError>;
    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        fields: WriteFields,
    ) -> Result<(), StoreError>;
    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Document>, StoreError>;
    async fn query(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;
}

pub mod in_memory;

// In memory implementation of the RecordStore port.
//
// Purpose
// - Support session manager tests and local development without a remote document database.
//
// Responsibilities
// - Keep documents per collection in memory and assign record ids on create.
// - Resolve server timestamp sentinels with the store clock. The clock never goes backwards, so a
//   timestamp written later is never earlier than one written before it.
// - Log every write attempt so tests can assert which calls were made.

use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::{
    Document, Filter, RecordStore, StoreError, StoredValue, WriteFields, WriteValue,
};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    Create {
        collection: String,
        fields: WriteFields,
    },
    Update {
        collection: String,
        id: RecordId,
        fields: WriteFields,
    },
}

#[derive(Debug, Clone)]
enum IdStrategy {
    UuidV7,
    Sequential { prefix: String },
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, BTreeMap<RecordId, Document>>,
    last_server_time: Option<DateTime<Utc>>,
    writes: Vec<StoreWrite>,
}

impl Inner {
    fn server_now(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let now = match self.last_server_time {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_server_time = Some(now);
        now
    }

    fn resolve(&mut self, fields: WriteFields) -> BTreeMap<String, StoredValue> {
        let mut server_time = None;
        fields
            .into_iter()
            .map(|(name, value)| {
                let stored = match value {
                    WriteValue::Text(text) => StoredValue::Text(text),
                    WriteValue::ServerTimestamp => {
                        // One write sees one server time, whatever the number of sentinels.
                        let at = *server_time.get_or_insert_with(|| self.server_now());
                        StoredValue::Timestamp(at)
                    }
                };
                (name, stored)
            })
            .collect()
    }
}

pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
    ids: IdStrategy,
    next_sequence: AtomicU64,
    is_offline: AtomicBool,
    delay_write_ms: AtomicU64,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Assigns uuid v7 record ids, like an auto-id document store.
    pub fn new() -> Self {
        Self::with_ids(IdStrategy::UuidV7)
    }

    /// Assigns `{prefix}1`, `{prefix}2`, ... in creation order.
    pub fn with_sequential_ids(prefix: impl Into<String>) -> Self {
        Self::with_ids(IdStrategy::Sequential {
            prefix: prefix.into(),
        })
    }

    fn with_ids(ids: IdStrategy) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            ids,
            next_sequence: AtomicU64::new(1),
            is_offline: AtomicBool::new(false),
            delay_write_ms: AtomicU64::new(0),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn writes(&self) -> Vec<StoreWrite> {
        self.inner.read().await.writes.clone()
    }

    /// Deletes a document behind the session's back, as another client could.
    pub async fn remove(&self, collection: &str, id: &RecordId) -> Option<Document> {
        self.inner
            .write()
            .await
            .collections
            .get_mut(collection)
            .and_then(|documents| documents.remove(id))
    }

    /// Inserts a document as if another device had written it.
    pub async fn insert(&self, collection: &str, document: Document) {
        self.inner
            .write()
            .await
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(document.id.clone(), document);
    }

    fn next_id(&self) -> RecordId {
        match &self.ids {
            IdStrategy::UuidV7 => RecordId::new(Uuid::now_v7().to_string()),
            IdStrategy::Sequential { prefix } => {
                let n = self.next_sequence.fetch_add(1, Ordering::SeqCst);
                RecordId::new(format!("{prefix}{n}"))
            }
        }
    }

    async fn simulate_latency(&self) {
        let delay = self.delay_write_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    fn ensure_online(&self, error: impl FnOnce(String) -> StoreError) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(error("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create(&self, collection: &str, fields: WriteFields) -> Result<RecordId, StoreError> {
        self.inner.write().await.writes.push(StoreWrite::Create {
            collection: collection.to_string(),
            fields: fields.clone(),
        });
        self.simulate_latency().await;
        self.ensure_online(StoreError::Write)?;

        let id = self.next_id();
        let mut guard = self.inner.write().await;
        let fields = guard.resolve(fields);
        guard
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(
                id.clone(),
                Document {
                    id: id.clone(),
                    fields,
                },
            );
        tracing::debug!(collection, record_id = %id, "record created");
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &RecordId,
        fields: WriteFields,
    ) -> Result<(), StoreError> {
        self.inner.write().await.writes.push(StoreWrite::Update {
            collection: collection.to_string(),
            id: id.clone(),
            fields: fields.clone(),
        });
        self.simulate_latency().await;
        self.ensure_online(StoreError::Write)?;

        let mut guard = self.inner.write().await;
        let exists = guard
            .collections
            .get(collection)
            .is_some_and(|documents| documents.contains_key(id));
        if !exists {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.clone(),
            });
        }
        let resolved = guard.resolve(fields);
        if let Some(document) = guard
            .collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
        {
            document.fields.extend(resolved);
        }
        tracing::debug!(collection, record_id = %id, "record updated");
        Ok(())
    }

    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Document>, StoreError> {
        self.ensure_online(StoreError::Read)?;
        let guard = self.inner.read().await;
        Ok(guard
            .collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn query(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        self.ensure_online(StoreError::Read)?;
        let guard = self.inner.read().await;
        Ok(guard
            .collections
            .get(collection)
            .map(|documents| {
                documents
                    .values()
                    .filter(|document| filter.matches(document))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

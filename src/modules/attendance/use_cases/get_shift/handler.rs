use crate::modules::attendance::adapters::outbound::shift_documents::{
    ShiftDocumentError, owned_by,
};
use crate::modules::attendance::core::shift_record::ShiftRecord;
use crate::shared::core::primitives::{RecordId, UserId};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetShiftError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Malformed(#[from] ShiftDocumentError),
}

/// Reads one persisted shift back for its owner.
pub struct GetShiftHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    collection: String,
    store: Arc<TStore>,
}

impl<TStore> GetShiftHandler<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(collection: impl Into<String>, store: Arc<TStore>) -> Self {
        Self {
            collection: collection.into(),
            store,
        }
    }

    /// A record owned by another user reads as absent, whatever its shape.
    pub async fn handle(
        &self,
        user_id: &UserId,
        record_id: &RecordId,
    ) -> Result<Option<ShiftRecord>, GetShiftError> {
        let Some(document) = self.store.get(&self.collection, record_id).await? else {
            return Ok(None);
        };
        if !owned_by(user_id).matches(&document) {
            return Ok(None);
        }
        Ok(Some(ShiftRecord::try_from(document)?))
    }
}

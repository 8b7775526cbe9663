// Shared test fixtures for attendance documents as the record store holds them.

use crate::modules::attendance::adapters::outbound::shift_documents::{
    END_TIME, LOCATION, START_TIME, USER_ID,
};
use crate::shared::core::primitives::RecordId;
use crate::shared::infrastructure::record_store::{Document, StoredValue};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

pub const SHIFT_START_MS: i64 = 1_700_000_000_000;
pub const SHIFT_END_MS: i64 = 1_700_028_800_000;

fn at(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

pub fn make_open_shift_document(id: &str, user_id: &str) -> Document {
    make_open_shift_document_started_at(id, user_id, SHIFT_START_MS)
}

pub fn make_open_shift_document_started_at(id: &str, user_id: &str, start_ms: i64) -> Document {
    Document {
        id: RecordId::from(id),
        fields: BTreeMap::from([
            (USER_ID.to_string(), StoredValue::Text(user_id.to_string())),
            (START_TIME.to_string(), StoredValue::Timestamp(at(start_ms))),
            (LOCATION.to_string(), StoredValue::Text("123 Main St".into())),
        ]),
    }
}

pub fn make_closed_shift_document(id: &str, user_id: &str) -> Document {
    let mut document = make_open_shift_document(id, user_id);
    document
        .fields
        .insert(END_TIME.to_string(), StoredValue::Timestamp(at(SHIFT_END_MS)));
    document
}

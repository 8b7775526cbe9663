// Translate shift records to and from record store documents.
//
// Document shape in the attendance collection:
//   { userId: text, startTime: timestamp, endTime?: timestamp, location: text }
// Both timestamps are only ever written as the server timestamp sentinel.

use crate::modules::attendance::core::shift_record::{NewShiftRecord, ShiftRecord};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::{
    Document, Filter, StoredValue, WriteFields, WriteValue,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

pub const USER_ID: &str = "userId";
pub const START_TIME: &str = "startTime";
pub const END_TIME: &str = "endTime";
pub const LOCATION: &str = "location";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShiftDocumentError {
    #[error("document {id} is missing field {field}")]
    MissingField { id: String, field: &'static str },

    #[error("document {id} has an unexpected value type for field {field}")]
    WrongType { id: String, field: &'static str },
}

pub fn start_fields(record: &NewShiftRecord) -> WriteFields {
    WriteFields::from([
        (
            USER_ID.to_string(),
            WriteValue::Text(record.user_id.as_str().to_string()),
        ),
        (START_TIME.to_string(), WriteValue::ServerTimestamp),
        (LOCATION.to_string(), WriteValue::Text(record.location.clone())),
    ])
}

pub fn end_fields() -> WriteFields {
    WriteFields::from([(END_TIME.to_string(), WriteValue::ServerTimestamp)])
}

pub fn open_shifts_filter(user_id: &UserId) -> Filter {
    owned_by(user_id).missing(END_TIME)
}

pub fn owned_by(user_id: &UserId) -> Filter {
    Filter::new().equals(USER_ID, user_id.as_str())
}

fn text<'a>(document: &'a Document, field: &'static str) -> Result<&'a str, ShiftDocumentError> {
    match document.fields.get(field) {
        Some(StoredValue::Text(value)) => Ok(value),
        Some(_) => Err(ShiftDocumentError::WrongType {
            id: document.id.to_string(),
            field,
        }),
        None => Err(ShiftDocumentError::MissingField {
            id: document.id.to_string(),
            field,
        }),
    }
}

fn timestamp(
    document: &Document,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, ShiftDocumentError> {
    match document.fields.get(field) {
        Some(StoredValue::Timestamp(at)) => Ok(Some(*at)),
        Some(_) => Err(ShiftDocumentError::WrongType {
            id: document.id.to_string(),
            field,
        }),
        None => Ok(None),
    }
}

impl TryFrom<Document> for ShiftRecord {
    type Error = ShiftDocumentError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let user_id = UserId::parse(Some(text(&document, USER_ID)?)).ok_or_else(|| {
            ShiftDocumentError::MissingField {
                id: document.id.to_string(),
                field: USER_ID,
            }
        })?;
        let start_time =
            timestamp(&document, START_TIME)?.ok_or_else(|| ShiftDocumentError::MissingField {
                id: document.id.to_string(),
                field: START_TIME,
            })?;
        let end_time = timestamp(&document, END_TIME)?;
        let location = text(&document, LOCATION)?.to_string();
        Ok(ShiftRecord {
            id: document.id,
            user_id,
            start_time,
            end_time,
            location,
        })
    }
}

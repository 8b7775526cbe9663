// Shift record: one attendance period as persisted by the record store.
//
// Purpose
// - `NewShiftRecord` is what a start writes: no id and no timestamps, both come from the store.
// - `ShiftRecord` is what the store holds after creation: id and start time always present.
//
// Notes
// - A record is open iff `end_time` is None.
// - Timestamps are store-assigned; nothing in this module takes a caller-chosen time.

use crate::shared::core::primitives::{RecordId, UserId};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShiftRecord {
    pub user_id: UserId,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftRecord {
    pub id: RecordId,
    pub user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: String,
}

impl ShiftRecord {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Worked time of a closed shift.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }
}

// ShiftState is the client-local shift lifecycle of one session.
//
// Purpose
// - Encode the lifecycle as explicit variants: CLOSED, STARTING, OPEN, ENDING.
// - STARTING and ENDING mark a store write in flight and act as the lock that serializes calls.
//
// Boundaries
// - No input or output. Transitions live in evolve.rs.

use crate::shared::core::primitives::RecordId;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ShiftState {
    #[default]
    Closed,
    Starting,
    Open {
        record_id: RecordId,
    },
    Ending {
        record_id: RecordId,
    },
}

impl ShiftState {
    /// The record this session has open, including while its end is in flight.
    pub fn open_record_id(&self) -> Option<&RecordId> {
        match self {
            ShiftState::Open { record_id } | ShiftState::Ending { record_id } => Some(record_id),
            ShiftState::Closed | ShiftState::Starting => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_open: self.open_record_id().is_some(),
            record_id: self.open_record_id().cloned(),
        }
    }
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub is_open: bool,
    pub record_id: Option<RecordId>,
}

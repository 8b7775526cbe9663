// Lifecycle events fed into evolve.
//
// Requested events come from an accepted guard; acknowledged and failed events come from the store
// call outcome. Restored comes from the open-shift lookup done when a session opens.

use crate::shared::core::primitives::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftEvent {
    StartRequested,
    StartAcknowledged { record_id: RecordId },
    StartFailed,
    EndRequested,
    EndAcknowledged,
    EndFailed,
    OpenShiftRestored { record_id: RecordId },
}

use crate::modules::attendance::core::{decision::DecideError, state::ShiftState};
use crate::shared::core::primitives::RecordId;

/// Returns the record to close. Only an OPEN session can end its shift.
pub fn decide_end(state: &ShiftState) -> Result<RecordId, DecideError> {
    match state {
        ShiftState::Open { record_id } => Ok(record_id.clone()),
        ShiftState::Closed | ShiftState::Starting | ShiftState::Ending { .. } => {
            Err(DecideError::NotStarted)
        }
    }
}

// Pure decision function for starting a shift.
//
// Responsibilities
// - Require an authenticated user, then require the session to be CLOSED.
// - Build the record to create, substituting the placeholder for a missing location label.
// - Never perform input or output.

use crate::modules::attendance::core::{
    decision::DecideError, location::resolve_label, shift_record::NewShiftRecord,
    state::ShiftState,
};
use crate::modules::attendance::use_cases::start_shift::command::StartShift;

pub fn decide_start(
    state: &ShiftState,
    command: StartShift,
    location_placeholder: &str,
) -> Result<NewShiftRecord, DecideError> {
    let Some(user_id) = command.user_id else {
        return Err(DecideError::NoUser);
    };
    match state {
        ShiftState::Closed => Ok(NewShiftRecord {
            user_id,
            location: resolve_label(command.location.as_deref(), location_placeholder),
        }),
        ShiftState::Starting | ShiftState::Open { .. } | ShiftState::Ending { .. } => {
            Err(DecideError::AlreadyStarted)
        }
    }
}

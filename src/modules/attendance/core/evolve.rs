use crate::modules::attendance::core::events::ShiftEvent;
use crate::modules::attendance::core::state::ShiftState;

pub fn evolve(state: ShiftState, event: ShiftEvent) -> ShiftState {
    match (state, event) {
        (ShiftState::Closed, ShiftEvent::StartRequested) => ShiftState::Starting,
        (ShiftState::Starting, ShiftEvent::StartAcknowledged { record_id }) => {
            ShiftState::Open { record_id }
        }
        (ShiftState::Starting, ShiftEvent::StartFailed) => ShiftState::Closed,
        (ShiftState::Open { record_id }, ShiftEvent::EndRequested) => {
            ShiftState::Ending { record_id }
        }
        (ShiftState::Ending { .. }, ShiftEvent::EndAcknowledged) => ShiftState::Closed,
        (ShiftState::Ending { record_id }, ShiftEvent::EndFailed) => ShiftState::Open { record_id },
        (ShiftState::Closed, ShiftEvent::OpenShiftRestored { record_id }) => {
            ShiftState::Open { record_id }
        }
        (state, _) => state,
    }
}

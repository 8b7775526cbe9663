use crate::modules::attendance::core::decision::DecideError;
use crate::shared::infrastructure::record_store::StoreError;
use thiserror::Error;

/// Everything a start, end or restore can fail with. Callers match it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("shift already started")]
    AlreadyStarted,

    #[error("shift has not started yet")]
    NotStarted,

    #[error("no authenticated user")]
    NoUser,

    #[error("failed to start shift: {0}")]
    StartFailed(#[source] StoreError),

    #[error("failed to end shift: {0}")]
    EndFailed(#[source] StoreError),

    #[error("failed to restore open shift: {0}")]
    RestoreFailed(#[source] StoreError),
}

impl From<DecideError> for ShiftError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::AlreadyStarted => ShiftError::AlreadyStarted,
            DecideError::NotStarted => ShiftError::NotStarted,
            DecideError::NoUser => ShiftError::NoUser,
        }
    }
}

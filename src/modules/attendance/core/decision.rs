#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("shift already started")]
    AlreadyStarted,

    #[error("shift has not started yet")]
    NotStarted,

    #[error("no authenticated user")]
    NoUser,
}

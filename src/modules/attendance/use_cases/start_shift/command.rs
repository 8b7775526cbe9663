use crate::shared::core::primitives::UserId;

/// User intent to clock in. Carries no time: the start time is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartShift {
    pub user_id: Option<UserId>,
    pub location: Option<String>,
}

impl StartShift {
    pub fn new(user_id: &str, location: impl Into<String>) -> Self {
        Self {
            user_id: UserId::parse(Some(user_id)),
            location: Some(location.into()),
        }
    }
}

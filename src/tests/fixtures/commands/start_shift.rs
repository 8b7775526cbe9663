// Shared test fixture for the StartShift command.
// Compiled into the crate only during tests, exposed under `crate::tests::fixtures`.

use crate::modules::attendance::use_cases::start_shift::command::StartShift;
use crate::shared::core::primitives::UserId;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct StartShiftDto {
    pub user_id: String,
    pub location: Option<String>,
}

pub struct StartShiftBuilder {
    inner: StartShift,
}

impl Default for StartShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StartShiftBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/start_shift.json").unwrap();
        let dto: StartShiftDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: StartShift {
                user_id: UserId::parse(Some(&dto.user_id)),
                location: dto.location,
            },
        }
    }

    pub fn user_id(mut self, v: Option<&str>) -> Self {
        self.inner.user_id = UserId::parse(v);
        self
    }

    pub fn location(mut self, v: Option<&str>) -> Self {
        self.inner.location = v.map(String::from);
        self
    }

    pub fn build(self) -> StartShift {
        self.inner
    }
}

#[cfg(test)]
mod start_shift_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = StartShiftBuilder::default().build();
        assert_eq!(built.user_id.as_ref().map(UserId::as_str), Some("user1"));
        assert_eq!(built.location.as_deref(), Some("123 Main St"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = StartShiftBuilder::new()
            .user_id(Some("user2"))
            .location(Some("456 Oak Ave"))
            .build();
        assert_eq!(custom, StartShift::new("user2", "456 Oak Ave"));
    }
}

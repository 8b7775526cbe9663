use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;

use crate::modules::attendance::session::errors::ShiftError;
use crate::modules::attendance::session::manager::ShiftSessionManager;
use crate::modules::attendance::use_cases::current_shift::inbound::http as current_shift_http;
use crate::modules::attendance::use_cases::end_shift::inbound::http as end_shift_http;
use crate::modules::attendance::use_cases::get_shift::inbound::http as get_shift_http;
use crate::modules::attendance::use_cases::manage_session::inbound::http as session_http;
use crate::modules::attendance::use_cases::start_shift::inbound::http as start_shift_http;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::StoreError;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;

/// Set by the identity provider's gateway once the caller is authenticated.
pub const USER_ID_HEADER: &str = "x-user-id";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/session",
            post(session_http::open).delete(session_http::close),
        )
        .route("/start-shift", post(start_shift_http::handle))
        .route("/end-shift", post(end_shift_http::handle))
        .route("/current-shift", get(current_shift_http::handle))
        .route("/shifts/{record_id}", get(get_shift_http::handle))
        .with_state(state)
}

pub fn user_id(headers: &HeaderMap) -> Option<UserId> {
    UserId::parse(
        headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
    )
}

/// The caller's session, opened on first use.
pub async fn session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Arc<ShiftSessionManager<InMemoryRecordStore>>, ShiftError> {
    let user_id = user_id(headers).ok_or(ShiftError::NoUser)?;
    state.sessions.open(&user_id).await
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn store_error_status(error: &StoreError) -> StatusCode {
    match error {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Write(_) | StoreError::Read(_) => StatusCode::BAD_GATEWAY,
    }
}

pub fn shift_error_status(error: &ShiftError) -> StatusCode {
    match error {
        ShiftError::NoUser => StatusCode::UNAUTHORIZED,
        ShiftError::AlreadyStarted | ShiftError::NotStarted => StatusCode::CONFLICT,
        ShiftError::StartFailed(store)
        | ShiftError::EndFailed(store)
        | ShiftError::RestoreFailed(store) => store_error_status(store),
    }
}

pub fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub fn shift_error_response(error: ShiftError) -> Response {
    error_response(shift_error_status(&error), error)
}

// Login and logout, as reported by the identity provider's gateway.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::attendance::session::errors::ShiftError;
use crate::shell::http::{session, shift_error_response, user_id};
use crate::shell::state::AppState;

pub async fn open(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    match session(&state, &headers).await {
        Ok(session) => Json(session.current_state()).into_response(),
        Err(error) => {
            tracing::warn!(error = %error, "session not opened");
            shift_error_response(error)
        }
    }
}

pub async fn close(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let Some(user_id) = user_id(&headers) else {
        return shift_error_response(ShiftError::NoUser);
    };
    state.sessions.close(&user_id).await;
    StatusCode::NO_CONTENT.into_response()
}

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::shell::http::{session, shift_error_response};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let ended = match session(&state, &headers).await {
        Ok(session) => session.end_shift().await,
        Err(error) => Err(error),
    };

    match ended {
        Ok(()) => {
            tracing::info!("shift ended");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => {
            tracing::warn!(error = %error, "end shift rejected");
            shift_error_response(error)
        }
    }
}

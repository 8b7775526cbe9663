use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::attendance::core::shift_record::ShiftRecord;
use crate::modules::attendance::use_cases::get_shift::handler::GetShiftError;
use crate::shared::core::primitives::RecordId;
use crate::shell::http::{error_response, store_error_status, user_id};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ShiftRecordResponse {
    #[serde(flatten)]
    pub record: ShiftRecord,
    pub is_open: bool,
    pub duration_seconds: Option<i64>,
}

impl From<ShiftRecord> for ShiftRecordResponse {
    fn from(record: ShiftRecord) -> Self {
        Self {
            is_open: record.is_open(),
            duration_seconds: record.duration().map(|worked| worked.num_seconds()),
            record,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(record_id): Path<String>,
) -> impl IntoResponse {
    let Some(user_id) = user_id(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "no authenticated user");
    };
    let record_id = RecordId::new(record_id);

    match state.get_shift_handler.handle(&user_id, &record_id).await {
        Ok(Some(record)) => Json(ShiftRecordResponse::from(record)).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("shift {record_id} not found"),
        ),
        Err(GetShiftError::Store(error)) => {
            tracing::warn!(record_id = %record_id, error = %error, "shift lookup failed");
            error_response(store_error_status(&error), error)
        }
        Err(GetShiftError::Malformed(error)) => {
            tracing::error!(record_id = %record_id, error = %error, "stored shift is malformed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error)
        }
    }
}

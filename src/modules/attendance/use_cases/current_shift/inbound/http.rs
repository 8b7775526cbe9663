use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};

use crate::shell::http::{session, shift_error_response};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    match session(&state, &headers).await {
        Ok(session) => Json(session.current_state()).into_response(),
        Err(error) => {
            tracing::warn!(error = %error, "current shift unavailable");
            shift_error_response(error)
        }
    }
}

#[cfg(test)]
mod current_shift_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::attendance::use_cases::start_shift::command::StartShift;
    use crate::shared::core::primitives::UserId;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/current-shift", get(handle))
            .with_state(state)
    }

    async fn current_shift(state: AppState, user: &str) -> serde_json::Value {
        let response = app(state)
            .oneshot(
                Request::get("/current-shift")
                    .header("x-user-id", user)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_report_a_closed_session() {
        let (_, state) = make_test_state();
        assert_eq!(
            current_shift(state, "user1").await,
            serde_json::json!({ "is_open": false, "record_id": null })
        );
    }

    #[tokio::test]
    async fn it_should_report_the_open_record() {
        let (_, state) = make_test_state();
        let user_id = UserId::parse(Some("user1")).unwrap();
        state
            .sessions
            .open(&user_id)
            .await
            .unwrap()
            .start_shift(StartShift::new("user1", "123 Main St"))
            .await
            .unwrap();

        assert_eq!(
            current_shift(state, "user1").await,
            serde_json::json!({ "is_open": true, "record_id": "r1" })
        );
    }

    #[tokio::test]
    async fn it_should_not_read_the_store_once_the_session_exists() {
        let (store, state) = make_test_state();
        let user_id = UserId::parse(Some("user1")).unwrap();
        state.sessions.open(&user_id).await.unwrap();
        store.set_offline(true);

        assert_eq!(current_shift(state, "user1").await["is_open"], false);
    }

    #[tokio::test]
    async fn it_should_return_401_without_a_user() {
        let (_, state) = make_test_state();
        let response = app(state)
            .oneshot(Request::get("/current-shift").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

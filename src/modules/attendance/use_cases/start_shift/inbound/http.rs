use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::location::{GeocodedAddress, format_address};
use crate::modules::attendance::use_cases::start_shift::command::StartShift;
use crate::shell::http::{session, shift_error_response, user_id};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartShiftBody {
    pub location: Option<String>,
    pub address: Option<GeocodedAddress>,
}

impl StartShiftBody {
    /// A non-blank explicit label wins over a reverse-geocode result.
    fn location_label(self) -> Option<String> {
        self.location
            .filter(|label| !label.trim().is_empty())
            .or_else(|| self.address.map(|address| format_address(Some(&address))))
    }
}

#[derive(Serialize)]
pub struct StartShiftResponse {
    pub record_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<StartShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let session = match session(&state, &headers).await {
        Ok(session) => session,
        Err(error) => {
            tracing::warn!(error = %error, "start shift rejected");
            return shift_error_response(error);
        }
    };

    let command = StartShift {
        user_id: user_id(&headers),
        location: body.location_label(),
    };

    match session.start_shift(command).await {
        Ok(record_id) => {
            tracing::info!(record_id = %record_id, "shift started");
            (
                StatusCode::CREATED,
                Json(StartShiftResponse {
                    record_id: record_id.to_string(),
                }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::warn!(error = %error, "start shift rejected");
            shift_error_response(error)
        }
    }
}

#[cfg(test)]
mod start_shift_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::core::primitives::{RecordId, UserId};
    use crate::shared::infrastructure::record_store::RecordStore;
    use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::{make_offline_store_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/start-shift", post(handle))
            .with_state(state)
    }

    fn start_request(user: Option<&str>, body: &str) -> Request<Body> {
        let mut request = Request::post("/start-shift").header("content-type", "application/json");
        if let Some(user) = user {
            request = request.header("x-user-id", user);
        }
        request.body(Body::from(body.to_string())).unwrap()
    }

    async fn stored_location(store: &InMemoryRecordStore, id: &str) -> serde_json::Value {
        let document = store
            .get("attendance", &RecordId::from(id))
            .await
            .unwrap()
            .unwrap();
        serde_json::to_value(&document.fields).unwrap()["location"].clone()
    }

    #[tokio::test]
    async fn it_should_return_201_with_record_id_on_valid_request() {
        let (store, state) = make_test_state();

        let response = app(state)
            .oneshot(start_request(Some("user1"), r#"{"location":"123 Main St"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["record_id"], "r1");
        assert_eq!(stored_location(&store, "r1").await, "123 Main St");
    }

    #[tokio::test]
    async fn it_should_format_a_geocoded_address() {
        let (store, state) = make_test_state();
        let body = r#"{"address":{"name":"City Hall","street":null,"city":"Springfield","region":"IL"}}"#;

        let response = app(state)
            .oneshot(start_request(Some("user1"), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            stored_location(&store, "r1").await,
            "City Hall, Springfield, IL"
        );
    }

    #[tokio::test]
    async fn it_should_prefer_the_address_over_a_blank_label() {
        let (store, state) = make_test_state();
        let body = r#"{"location":"  ","address":{"name":"City Hall","street":null,"city":"Springfield","region":"IL"}}"#;

        let response = app(state)
            .oneshot(start_request(Some("user1"), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            stored_location(&store, "r1").await,
            "City Hall, Springfield, IL"
        );
    }

    #[tokio::test]
    async fn it_should_store_the_placeholder_without_a_location() {
        let (store, state) = make_test_state();

        let response = app(state)
            .oneshot(start_request(Some("user1"), "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            stored_location(&store, "r1").await,
            "Location not available"
        );
    }

    #[tokio::test]
    async fn it_should_return_409_when_a_shift_is_already_open() {
        let (_, state) = make_test_state();
        let first = app(state.clone())
            .oneshot(start_request(Some("user1"), "{}"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app(state)
            .oneshot(start_request(Some("user1"), r#"{"location":"456 Oak Ave"}"#))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_401_without_a_user() {
        let (store, state) = make_test_state();
        let response = app(state)
            .oneshot(start_request(None, "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(store.writes().await.is_empty());
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let (_, state) = make_test_state();
        let response = app(state)
            .oneshot(start_request(Some("user1"), "not-json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_502_when_the_store_is_offline() {
        let (store, state) = make_test_state();
        let user = UserId::parse(Some("user1")).unwrap();
        state.sessions.open(&user).await.unwrap();
        store.set_offline(true);

        let response = app(state.clone())
            .oneshot(start_request(Some("user1"), "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let session = state.sessions.get(&user).await.unwrap();
        assert!(!session.current_state().is_open);
    }

    #[tokio::test]
    async fn it_should_return_502_when_the_session_cannot_be_restored() {
        let (_, state) = make_offline_store_state();
        let response = app(state)
            .oneshot(start_request(Some("user1"), "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

// Composition root for the attendance service.
//
// Responsibilities
// - Read config from environment.
// - Wire the record store into the session registry and use case handlers.
// - Serve the HTTP routes and the GraphQL endpoint behind tracing and CORS layers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use axum::{Extension, Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::shell::state::AppState;

pub fn app(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());
    http::router(state)
        .route(
            graphql::GRAPHQL_PATH,
            get(graphql::graphiql).post(graphql::graphql),
        )
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

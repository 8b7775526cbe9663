use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};
use std::sync::Arc;

use crate::modules::attendance::session::errors::ShiftError;
use crate::modules::attendance::session::manager::ShiftSessionManager;
use crate::modules::attendance::use_cases::current_shift::inbound::graphql::CurrentShiftQuery;
use crate::modules::attendance::use_cases::end_shift::inbound::graphql::EndShiftMutation;
use crate::modules::attendance::use_cases::get_shift::inbound::graphql::GetShiftQuery;
use crate::modules::attendance::use_cases::start_shift::inbound::graphql::StartShiftMutation;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::http::shift_error_status;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(CurrentShiftQuery, GetShiftQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(StartShiftMutation, EndShiftMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Resolves a session the same way the HTTP routes do, with the user id passed as an argument.
pub async fn session(
    state: &AppState,
    user_id: &str,
) -> async_graphql::Result<Arc<ShiftSessionManager<InMemoryRecordStore>>> {
    let user_id = UserId::parse(Some(user_id)).ok_or_else(|| shift_error(ShiftError::NoUser))?;
    state.sessions.open(&user_id).await.map_err(shift_error)
}

/// Carries the HTTP status as an error code so clients can branch without parsing messages.
pub fn shift_error(error: ShiftError) -> async_graphql::Error {
    let code = shift_error_status(&error).as_u16();
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
    })
}

use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::state::SessionSnapshot;
use crate::shell::graphql::session;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlShiftSnapshot {
    pub is_open: bool,
    pub record_id: Option<ID>,
}

impl From<SessionSnapshot> for GqlShiftSnapshot {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            is_open: snapshot.is_open,
            record_id: snapshot.record_id.map(|id| ID(id.to_string())),
        }
    }
}

#[derive(Default)]
pub struct CurrentShiftQuery;

#[Object]
impl CurrentShiftQuery {
    async fn current_shift(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<GqlShiftSnapshot> {
        let state = context.data_unchecked::<AppState>();
        let session = session(state, &user_id).await?;
        Ok(session.current_state().into())
    }
}

use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::shift_record::ShiftRecord;
use crate::shared::core::primitives::{RecordId, UserId};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlShiftRecord {
    pub id: ID,
    pub user_id: String,
    /// RFC 3339, as assigned by the record store.
    pub start_time: String,
    pub end_time: Option<String>,
    pub location: String,
}

impl From<ShiftRecord> for GqlShiftRecord {
    fn from(record: ShiftRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            user_id: record.user_id.to_string(),
            start_time: record.start_time.to_rfc3339(),
            end_time: record.end_time.map(|at| at.to_rfc3339()),
            location: record.location,
        }
    }
}

#[derive(Default)]
pub struct GetShiftQuery;

#[Object]
impl GetShiftQuery {
    async fn shift(
        &self,
        context: &Context<'_>,
        user_id: String,
        record_id: ID,
    ) -> GqlResult<Option<GqlShiftRecord>> {
        let state = context.data_unchecked::<AppState>();
        let user_id = UserId::parse(Some(&user_id))
            .ok_or_else(|| async_graphql::Error::new("no authenticated user"))?;
        let record = state
            .get_shift_handler
            .handle(&user_id, &RecordId::new(record_id.0))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(record.map(Into::into))
    }
}

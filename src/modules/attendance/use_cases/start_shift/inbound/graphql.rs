use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::attendance::use_cases::start_shift::command::StartShift;
use crate::shared::core::primitives::UserId;
use crate::shell::graphql::{session, shift_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartShiftMutation;

#[Object]
impl StartShiftMutation {
    async fn start_shift(
        &self,
        context: &Context<'_>,
        user_id: String,
        location: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let session = session(state, &user_id).await?;

        let command = StartShift {
            user_id: UserId::parse(Some(&user_id)),
            location,
        };
        let record_id = session.start_shift(command).await.map_err(|error| {
            tracing::warn!(error = %error, "start shift rejected");
            shift_error(error)
        })?;

        tracing::info!(record_id = %record_id, "shift started");
        Ok(ID(record_id.to_string()))
    }
}

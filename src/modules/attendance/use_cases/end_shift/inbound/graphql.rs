use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::graphql::{session, shift_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EndShiftMutation;

#[Object]
impl EndShiftMutation {
    async fn end_shift(&self, context: &Context<'_>, user_id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        session(state, &user_id)
            .await?
            .end_shift()
            .await
            .map_err(|error| {
                tracing::warn!(error = %error, "end shift rejected");
                shift_error(error)
            })?;

        tracing::info!("shift ended");
        Ok(true)
    }
}

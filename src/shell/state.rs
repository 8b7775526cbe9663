use crate::modules::attendance::session::registry::{SessionRegistry, SessionSettings};
use crate::modules::attendance::use_cases::get_shift::handler::GetShiftHandler;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry<InMemoryRecordStore>>,
    pub get_shift_handler: Arc<GetShiftHandler<InMemoryRecordStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryRecordStore>, settings: SessionSettings) -> Self {
        let get_shift_handler = Arc::new(GetShiftHandler::new(
            settings.collection.clone(),
            store.clone(),
        ));
        Self {
            sessions: Arc::new(SessionRegistry::new(store, settings)),
            get_shift_handler,
        }
    }
}

// Shared AppState fixtures for inbound adapter tests.

use crate::modules::attendance::session::registry::SessionSettings;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> (Arc<InMemoryRecordStore>, AppState) {
    let store = Arc::new(InMemoryRecordStore::with_sequential_ids("r"));
    let state = AppState::new(store.clone(), SessionSettings::default());
    (store, state)
}

pub fn make_offline_store_state() -> (Arc<InMemoryRecordStore>, AppState) {
    let (store, state) = make_test_state();
    store.toggle_offline();
    (store, state)
}

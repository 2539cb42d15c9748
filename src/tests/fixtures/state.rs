// AppState builders for inbound adapter tests.

use crate::modules::projects::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::modules::projects::core::record::ProjectRecord;
use crate::shell::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_CONFIRMATION_TTL: Duration = Duration::from_secs(60);

pub fn make_test_state(records: Vec<ProjectRecord>) -> AppState {
    AppState::new(
        Arc::new(InMemoryRecordStore::with_records(records)),
        TEST_CONFIRMATION_TTL,
    )
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryRecordStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), TEST_CONFIRMATION_TTL)
}

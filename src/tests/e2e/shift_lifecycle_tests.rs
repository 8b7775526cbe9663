use crate::modules::attendance::adapters::outbound::shift_documents::END_TIME;
use crate::modules::attendance::core::state::SessionSnapshot;
use crate::modules::attendance::session::errors::ShiftError;
use crate::modules::attendance::session::registry::{SessionRegistry, SessionSettings};
use crate::modules::attendance::use_cases::get_shift::handler::GetShiftHandler;
use crate::modules::attendance::use_cases::start_shift::command::StartShift;
use crate::shared::core::primitives::{RecordId, UserId};
use crate::shared::infrastructure::record_store::WriteValue;
use crate::shared::infrastructure::record_store::in_memory::{InMemoryRecordStore, StoreWrite};
use std::sync::Arc;

#[tokio::test]
async fn runs_a_shift_from_login_to_logout() {
    let store = Arc::new(InMemoryRecordStore::with_sequential_ids("r"));
    let registry = SessionRegistry::new(store.clone(), SessionSettings::default());
    let records = GetShiftHandler::new("attendance", store.clone());
    let user1 = UserId::parse(Some("user1")).unwrap();

    let session = registry.open(&user1).await.unwrap();
    assert_eq!(session.end_shift().await, Err(ShiftError::NotStarted));
    assert!(store.writes().await.is_empty());

    let record_id = session
        .start_shift(StartShift::new("user1", "123 Main St"))
        .await
        .unwrap();
    assert_eq!(record_id, RecordId::from("r1"));
    assert_eq!(
        session
            .start_shift(StartShift::new("user1", "456 Oak Ave"))
            .await,
        Err(ShiftError::AlreadyStarted)
    );
    assert_eq!(
        registry.open(&user1).await.unwrap().current_state(),
        SessionSnapshot {
            is_open: true,
            record_id: Some(RecordId::from("r1"))
        }
    );

    session.end_shift().await.unwrap();
    assert_eq!(
        store.writes().await.last(),
        Some(&StoreWrite::Update {
            collection: "attendance".into(),
            id: RecordId::from("r1"),
            fields: [(END_TIME.to_string(), WriteValue::ServerTimestamp)].into(),
        })
    );
    registry.close(&user1).await;

    let record = records
        .handle(&user1, &RecordId::from("r1"))
        .await
        .unwrap()
        .expect("record should be readable after logout");
    assert_eq!(record.location, "123 Main St");
    assert!(record.start_time <= record.end_time.unwrap());

    let next = registry.open(&user1).await.unwrap();
    assert!(!next.current_state().is_open);
    let second = next
        .start_shift(StartShift::new("user1", "456 Oak Ave"))
        .await
        .unwrap();
    assert_eq!(second, RecordId::from("r2"));
}

#[tokio::test]
async fn keeps_sessions_of_different_users_apart() {
    let store = Arc::new(InMemoryRecordStore::with_sequential_ids("r"));
    let registry = SessionRegistry::new(store.clone(), SessionSettings::default());
    let user1 = UserId::parse(Some("user1")).unwrap();
    let user2 = UserId::parse(Some("user2")).unwrap();

    registry
        .open(&user1)
        .await
        .unwrap()
        .start_shift(StartShift::new("user1", "123 Main St"))
        .await
        .unwrap();
    let other = registry.open(&user2).await.unwrap();
    assert!(!other.current_state().is_open);
    assert_eq!(other.end_shift().await, Err(ShiftError::NotStarted));

    let records = GetShiftHandler::new("attendance", store);
    assert_eq!(records.handle(&user2, &RecordId::from("r1")).await, Ok(None));
}

// Shift session manager: the client-local shift lifecycle of one authenticated session.
//
// Responsibilities
// - Check the guard and enter STARTING or ENDING in one atomic step, so concurrent calls serialize.
// - Issue exactly one store write per accepted call and fold its outcome back into the state.
// - Publish every transition to subscribers.
//
// Boundaries
// - The store write runs on its own task. A caller that stops waiting does not cancel it; the
//   outcome still lands in the state.
// - Failures go back to the caller untouched. Nothing is retried or logged here.

use crate::modules::attendance::adapters::outbound::shift_documents::{
    end_fields, open_shifts_filter, start_fields,
};
use crate::modules::attendance::core::decision::DecideError;
use crate::modules::attendance::core::events::ShiftEvent;
use crate::modules::attendance::core::evolve::evolve;
use crate::modules::attendance::core::shift_record::ShiftRecord;
use crate::modules::attendance::core::state::{SessionSnapshot, ShiftState};
use crate::modules::attendance::session::errors::ShiftError;
use crate::modules::attendance::use_cases::end_shift::decide::decide_end;
use crate::modules::attendance::use_cases::start_shift::command::StartShift;
use crate::modules::attendance::use_cases::start_shift::decide::decide_start;
use crate::shared::core::primitives::{RecordId, UserId};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinError;

pub struct ShiftSessionManager<TStore>
where
    TStore: RecordStore + 'static,
{
    collection: String,
    location_placeholder: String,
    store: Arc<TStore>,
    state: Arc<SessionState>,
}

impl<TStore> ShiftSessionManager<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(
        collection: impl Into<String>,
        location_placeholder: impl Into<String>,
        store: Arc<TStore>,
    ) -> Self {
        Self {
            collection: collection.into(),
            location_placeholder: location_placeholder.into(),
            store,
            state: Arc::new(SessionState::new()),
        }
    }

    pub async fn start_shift(&self, command: StartShift) -> Result<RecordId, ShiftError> {
        let record = self.enter(ShiftEvent::StartRequested, |state| {
            decide_start(state, command, &self.location_placeholder)
        })?;

        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let collection = self.collection.clone();
        let write = tokio::spawn(async move {
            let created = store.create(&collection, start_fields(&record)).await;
            let outcome = match &created {
                Ok(record_id) => ShiftEvent::StartAcknowledged {
                    record_id: record_id.clone(),
                },
                Err(_) => ShiftEvent::StartFailed,
            };
            state.apply(outcome);
            created
        });

        match write.await {
            Ok(created) => created.map_err(ShiftError::StartFailed),
            Err(aborted) => {
                self.state.apply(ShiftEvent::StartFailed);
                Err(ShiftError::StartFailed(interrupted(aborted)))
            }
        }
    }

    pub async fn end_shift(&self) -> Result<(), ShiftError> {
        let record_id = self.enter(ShiftEvent::EndRequested, decide_end)?;

        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let collection = self.collection.clone();
        let write = tokio::spawn(async move {
            let updated = store.update(&collection, &record_id, end_fields()).await;
            let outcome = match &updated {
                Ok(()) => ShiftEvent::EndAcknowledged,
                Err(_) => ShiftEvent::EndFailed,
            };
            state.apply(outcome);
            updated
        });

        match write.await {
            Ok(updated) => updated.map_err(ShiftError::EndFailed),
            Err(aborted) => {
                self.state.apply(ShiftEvent::EndFailed);
                Err(ShiftError::EndFailed(interrupted(aborted)))
            }
        }
    }

    /// Local read only; never reaches the store.
    pub fn current_state(&self) -> SessionSnapshot {
        self.state.updates.borrow().snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ShiftState> {
        self.state.updates.subscribe()
    }

    /// Resolves once no store write is in flight.
    pub async fn settled(&self) {
        let mut updates = self.subscribe();
        // The sender lives as long as `self`, so the wait cannot fail.
        let _ = updates
            .wait_for(|state| !matches!(state, ShiftState::Starting | ShiftState::Ending { .. }))
            .await;
    }

    /// Adopts the user's most recently started open record, if the store holds one.
    ///
    /// Only a CLOSED session adopts a record. Documents that do not read back as a shift record
    /// are ignored.
    pub async fn restore_open_shift(
        &self,
        user_id: &UserId,
    ) -> Result<Option<RecordId>, ShiftError> {
        let documents = self
            .store
            .query(&self.collection, &open_shifts_filter(user_id))
            .await
            .map_err(ShiftError::RestoreFailed)?;

        let latest = documents
            .into_iter()
            .filter_map(|document| ShiftRecord::try_from(document).ok())
            .max_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));

        let Some(latest) = latest else {
            return Ok(None);
        };
        let restored = self.state.apply(ShiftEvent::OpenShiftRestored {
            record_id: latest.id.clone(),
        });
        Ok(restored.then_some(latest.id))
    }

    /// Runs the guard against the current state and, when it accepts, applies `requested` under the
    /// same lock.
    fn enter<T>(
        &self,
        requested: ShiftEvent,
        guard: impl FnOnce(&ShiftState) -> Result<T, DecideError>,
    ) -> Result<T, ShiftError> {
        let _transition = self.state.lock();
        let accepted = {
            let current = self.state.updates.borrow();
            guard(&*current)?
        };
        self.state
            .updates
            .send_modify(|state| *state = evolve(std::mem::take(state), requested));
        Ok(accepted)
    }
}

/// The session's current state plus the lock every transition takes.
struct SessionState {
    transitions: Mutex<()>,
    updates: watch::Sender<ShiftState>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            transitions: Mutex::new(()),
            updates: watch::Sender::new(ShiftState::Closed),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.transitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Folds `event` into the state. Returns whether the state changed.
    fn apply(&self, event: ShiftEvent) -> bool {
        let _transition = self.lock();
        self.updates.send_if_modified(|current| {
            let next = evolve(current.clone(), event);
            if next == *current {
                return false;
            }
            *current = next;
            true
        })
    }
}

fn interrupted(aborted: JoinError) -> StoreError {
    StoreError::Write(format!("store call interrupted: {aborted}"))
}

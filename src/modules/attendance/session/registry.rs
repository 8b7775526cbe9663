// One shift session per authenticated user.
//
// Responsibilities
// - Create a session on login and hand back the same one until logout.
// - Optionally adopt the user's open record from the store when a session is created.
//
// Notes
// - Closing a session drops local state only. An open record stays open in the store.
// - Closing waits for the session's in-flight write, so a new session never queries the store
//   ahead of it.

use crate::modules::attendance::core::location::DEFAULT_LOCATION_PLACEHOLDER;
use crate::modules::attendance::session::errors::ShiftError;
use crate::modules::attendance::session::manager::ShiftSessionManager;
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub collection: String,
    pub location_placeholder: String,
    pub resume_open_shift: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            collection: "attendance".to_string(),
            location_placeholder: DEFAULT_LOCATION_PLACEHOLDER.to_string(),
            resume_open_shift: true,
        }
    }
}

pub struct SessionRegistry<TStore>
where
    TStore: RecordStore + 'static,
{
    store: Arc<TStore>,
    settings: SessionSettings,
    sessions: RwLock<HashMap<UserId, Arc<ShiftSessionManager<TStore>>>>,
}

impl<TStore> SessionRegistry<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(store: Arc<TStore>, settings: SessionSettings) -> Self {
        Self {
            store,
            settings,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the user's session, creating it on first use.
    ///
    /// A new session first looks for an open record to resume when `resume_open_shift` is set. If
    /// that lookup fails the session is not registered, so the next call tries again.
    pub async fn open(
        &self,
        user_id: &UserId,
    ) -> Result<Arc<ShiftSessionManager<TStore>>, ShiftError> {
        if let Some(existing) = self.get(user_id).await {
            return Ok(existing);
        }

        let session = Arc::new(ShiftSessionManager::new(
            self.settings.collection.clone(),
            self.settings.location_placeholder.clone(),
            Arc::clone(&self.store),
        ));
        if self.settings.resume_open_shift {
            match session.restore_open_shift(user_id).await {
                Ok(Some(record_id)) => {
                    tracing::info!(user_id = %user_id, record_id = %record_id, "resumed open shift")
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(user_id = %user_id, error = %error, "open shift lookup failed");
                    return Err(error);
                }
            }
        }

        let mut sessions = self.sessions.write().await;
        // Another request may have opened the session while the lookup ran.
        let session = sessions
            .entry(user_id.clone())
            .or_insert(session)
            .clone();
        tracing::debug!(user_id = %user_id, "session opened");
        Ok(session)
    }

    pub async fn get(&self, user_id: &UserId) -> Option<Arc<ShiftSessionManager<TStore>>> {
        self.sessions.read().await.get(user_id).cloned()
    }

    /// Returns whether a session existed.
    ///
    /// Holds the registry until a pending start or end has landed. Logins wait behind it.
    pub async fn close(&self, user_id: &UserId) -> bool {
        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.remove(user_id) else {
            return false;
        };
        session.settled().await;
        tracing::debug!(user_id = %user_id, "session closed");
        true
    }
}

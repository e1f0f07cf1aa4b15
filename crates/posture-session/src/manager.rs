//! SessionManager — concurrent per-session stores via DashMap.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, info};

use posture_core::config::SessionConfig;
use posture_core::errors::SessionError;
use posture_observability::session_span;
use posture_store::AssetStore;

use crate::session::Session;

/// Thread-safe registry of assessment sessions.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<DashMap<String, Session>>,
    /// Serializes creation so the capacity check and the insert are atomic.
    create_lock: Arc<Mutex<()>>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            create_lock: Arc::new(Mutex::new(())),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Create a session under a fresh UUID v4 and return its ID.
    pub fn create_session(&self) -> Result<String, SessionError> {
        self.create_session_with_id(uuid::Uuid::new_v4().to_string())
    }

    /// Create a session under a caller-chosen ID.
    ///
    /// An existing session with that ID is kept as is, so repeated calls
    /// resume rather than reset.
    pub fn create_session_with_id(
        &self,
        session_id: impl Into<String>,
    ) -> Result<String, SessionError> {
        let session_id = session_id.into();
        let _guard = self
            .create_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.sessions.contains_key(&session_id) {
            debug!(session_id = %session_id, "session resumed");
            return Ok(session_id);
        }
        if self.sessions.len() >= self.config.max_sessions {
            return Err(SessionError::CapacityReached {
                max: self.config.max_sessions,
            });
        }

        self.sessions.insert(session_id.clone(), Session::new());
        info!(session_id = %session_id, "session created");
        Ok(session_id)
    }

    /// Read access to a session's store.
    ///
    /// `f` runs while a shard lock of the session map is held. Calling back
    /// into this manager from inside `f` may deadlock.
    pub fn with_store<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&AssetStore) -> R,
    ) -> Result<R, SessionError> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or_else(|| not_found(session_id))?;
        Ok(f(&session.store))
    }

    /// Write access to a session's store. Marks the session active.
    ///
    /// `f` runs while a shard write lock of the session map is held. Calling
    /// back into this manager from inside `f` may deadlock.
    pub fn with_store_mut<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut AssetStore) -> R,
    ) -> Result<R, SessionError> {
        let _span = session_span!(session_id).entered();
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| not_found(session_id))?;
        session.touch();
        Ok(f(&mut session.store))
    }

    /// Creation and last-activity timestamps for a session.
    pub fn activity(
        &self,
        session_id: &str,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), SessionError> {
        self.sessions
            .get(session_id)
            .map(|s| (s.created_at, s.last_activity))
            .ok_or_else(|| not_found(session_id))
    }

    pub fn remove_session(&self, session_id: &str) -> Result<Session, SessionError> {
        let (_, session) = self
            .sessions
            .remove(session_id)
            .ok_or_else(|| not_found(session_id))?;
        info!(session_id = %session_id, "session removed");
        Ok(session)
    }

    /// Drop every session idle for longer than the configured timeout.
    /// Returns how many were removed.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let timeout = i64::try_from(self.config.idle_timeout_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.idle_for(now) <= timeout);
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!(removed, "idle sessions evicted");
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn not_found(session_id: &str) -> SessionError {
    SessionError::NotFound {
        session_id: session_id.to_string(),
    }
}

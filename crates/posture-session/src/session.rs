//! Session — one user's store plus activity timestamps.

use chrono::{DateTime, Duration, Utc};

use posture_store::AssetStore;

#[derive(Debug, Clone)]
pub struct Session {
    pub store: AssetStore,
    pub created_at: DateTime<Utc>,
    /// Bumped on every write through the manager.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            store: AssetStore::new(),
            created_at: now,
            last_activity: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Time since last activity, measured against `now`.
    pub fn idle_for(&self, now: DateTime<Utc>) -> Duration {
        now - self.last_activity
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

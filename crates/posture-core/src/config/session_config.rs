use serde::{Deserialize, Serialize};

use super::defaults;

/// Session registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions idle longer than this are evicted (seconds).
    pub idle_timeout_secs: u64,
    /// Upper bound on concurrently held sessions.
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: defaults::DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
            max_sessions: defaults::DEFAULT_MAX_SESSIONS,
        }
    }
}

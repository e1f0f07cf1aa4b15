// Single source of truth for all default values.

// --- Recommendation ---
pub const DEFAULT_PREVIEW_LIMIT: usize = 4;
pub const MAX_PREVIEW_LIMIT: usize = 10;
pub const DEFAULT_OVERFLOW_MARKER: &str = "...";
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "No matching vendors";
pub const DEFAULT_LOOKUP_URL: &str = "https://secpaas.org.tw/W_SecDocProduct";

// --- Session ---
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 3600; // 1 hour
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files & environment ---
pub const PROJECT_CONFIG_FILENAME: &str = "posture.toml";
pub const ENV_PREVIEW_LIMIT: &str = "POSTURE_PREVIEW_LIMIT";
pub const ENV_LOG_LEVEL: &str = "POSTURE_LOG_LEVEL";
pub const ENV_SESSION_IDLE_TIMEOUT_SECS: &str = "POSTURE_SESSION_IDLE_TIMEOUT_SECS";

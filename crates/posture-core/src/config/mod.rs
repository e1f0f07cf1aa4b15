//! Configuration system for Posture.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod posture_config;
pub mod recommendation_config;
pub mod session_config;

pub use observability_config::ObservabilityConfig;
pub use posture_config::PostureConfig;
pub use recommendation_config::RecommendationConfig;
pub use session_config::SessionConfig;

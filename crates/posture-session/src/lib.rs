//! # posture-session
//!
//! Each assessment session owns its own `AssetStore`. The manager hands out
//! scoped access through closures so no lock guard escapes the map.

pub mod manager;
pub mod session;

pub use manager::SessionManager;
pub use session::Session;

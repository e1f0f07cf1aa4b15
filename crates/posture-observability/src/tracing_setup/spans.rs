//! Span definitions per operation: classification, heat map, intake, session.

/// Create a cell classification span.
#[macro_export]
macro_rules! classify_span {
    ($category:expr, $function:expr) => {
        tracing::debug_span!("posture.classify", category = %$category, function = %$function)
    };
}

/// Create a heat map span.
#[macro_export]
macro_rules! heat_map_span {
    ($asset_count:expr) => {
        tracing::info_span!("posture.heat_map", asset_count = $asset_count)
    };
}

/// Create a bulk intake span.
#[macro_export]
macro_rules! intake_span {
    ($line_count:expr) => {
        tracing::info_span!("posture.intake", line_count = $line_count)
    };
}

/// Create a session span.
#[macro_export]
macro_rules! session_span {
    ($session_id:expr) => {
        tracing::info_span!("posture.session", session_id = %$session_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFY: &str = "posture.classify";
    pub const HEAT_MAP: &str = "posture.heat_map";
    pub const INTAKE: &str = "posture.intake";
    pub const SESSION: &str = "posture.session";
}

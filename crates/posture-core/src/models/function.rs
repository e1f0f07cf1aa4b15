use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::ModelError;

/// Defence lifecycle function. One column of the assessment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Identify,
    Protect,
    Detect,
    Respond,
    Recover,
}

impl Function {
    /// All functions in grid order (leftmost column first).
    pub const ALL: [Function; 5] = [
        Self::Identify,
        Self::Protect,
        Self::Detect,
        Self::Respond,
        Self::Recover,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identify => "Identify",
            Self::Protect => "Protect",
            Self::Detect => "Detect",
            Self::Respond => "Respond",
            Self::Recover => "Recover",
        }
    }

    /// Two-letter short code, e.g. `ID` for Identify.
    pub fn code(self) -> &'static str {
        match self {
            Self::Identify => "ID",
            Self::Protect => "PR",
            Self::Detect => "DE",
            Self::Respond => "RS",
            Self::Recover => "RC",
        }
    }

    /// Zero-based column index in the grid.
    pub fn index(self) -> usize {
        match self {
            Self::Identify => 0,
            Self::Protect => 1,
            Self::Detect => 2,
            Self::Respond => 3,
            Self::Recover => 4,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the full name or the short code, case-insensitively.
impl FromStr for Function {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| {
                f.name().eq_ignore_ascii_case(wanted) || f.code().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ModelError::UnknownFunction {
                value: s.to_string(),
            })
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::ModelError;

/// Asset category. One row of the assessment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Device,
    Application,
    Network,
    Data,
    User,
}

impl Category {
    /// All categories in grid order (top row first).
    pub const ALL: [Category; 5] = [
        Self::Device,
        Self::Application,
        Self::Network,
        Self::Data,
        Self::User,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Device => "Device",
            Self::Application => "Application",
            Self::Network => "Network",
            Self::Data => "Data",
            Self::User => "User",
        }
    }

    /// Zero-based row index in the grid.
    pub fn index(self) -> usize {
        match self {
            Self::Device => 0,
            Self::Application => 1,
            Self::Network => 2,
            Self::Data => 3,
            Self::User => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

use serde::{Deserialize, Serialize};

/// How much of the fetch → diff → announce → persist cycle actually touches the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Post every new issue and persist the updated store.
    #[default]
    Live,
    /// Record new issues as seen but do not post them.
    Silent,
    /// Neither post nor record anything; only report what would happen.
    Dry,
}

impl RunMode {
    /// Whether announcements are sent over the network.
    pub const fn posts(self) -> bool {
        matches!(self, Self::Live)
    }

    /// Whether newly seen issues are written to the store.
    pub const fn records(self) -> bool {
        !matches!(self, Self::Dry)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Silent => "silent",
            Self::Dry => "dry",
        }
    }
}

/// Counters for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Issues returned by the source.
    pub fetched: usize,
    /// Issues not previously known to the store.
    pub new: usize,
    /// Issues successfully posted.
    pub announced: usize,
    /// Issues skipped because the store already knew them.
    pub already_seen: usize,
    /// Issues whose store write or announcement failed.
    pub failed: usize,
}

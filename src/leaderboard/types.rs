//! On-disk leaderboard records.

use serde::{Deserialize, Serialize};

/// One finished session as recorded on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
    pub level: u32,
    /// UTC, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
}

/// The whole file: ranked entries plus the digest that vouches for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardFile {
    pub entries: Vec<LeaderboardEntry>,
    pub hash: String,
}

/// Result of recording a new score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Entries as written, best first.
    pub entries: Vec<LeaderboardEntry>,
    /// 1-based rank of the new entry, `None` if it did not make the cut.
    pub rank: Option<usize>,
}

use std::io;
use thiserror::Error;

/// Why a leaderboard file could not be trusted or written.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("leaderboard file is malformed: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("leaderboard digest mismatch (stored {stored}, computed {computed})")]
    Tampered { stored: String, computed: String },

    #[error("failed to serialize leaderboard: {0}")]
    Serialize(#[source] serde_json::Error),
}

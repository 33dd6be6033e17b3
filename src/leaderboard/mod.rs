//! Top-five leaderboard persisted as JSON with a keyed SHA-256 digest.
//!
//! A file that fails to parse or whose digest does not match is treated as
//! an empty leaderboard, and the next write replaces it.

pub mod digest;
pub mod error;
pub mod store;
pub mod types;

pub use digest::compute_digest;
pub use error::LeaderboardError;
pub use store::{leaderboard_file_name, rank_entries, sanitize_name, LeaderboardStore};
pub use types::{LeaderboardEntry, LeaderboardFile, UpdateOutcome};

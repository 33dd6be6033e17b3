//! Leaderboard persistence with digest verification and atomic writes.

use super::digest::{compute_digest, digest_value};
use super::error::LeaderboardError;
use super::types::{LeaderboardEntry, LeaderboardFile, UpdateOutcome};
use crate::core::constants::{
    LEADERBOARD_CAPACITY, LEADERBOARD_DATE_FORMAT, LEADERBOARD_FILENAME, LEADERBOARD_SECRET,
    MAX_NAME_LEN,
};
use crate::utils::persistence::{game_dir, write_atomic};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// File layout as read back, before the entries are trusted.
#[derive(Deserialize)]
struct RawLeaderboardFile {
    entries: Value,
    hash: String,
}

/// Reads and writes the top-N leaderboard file.
pub struct LeaderboardStore {
    path: PathBuf,
    secret: String,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>, secret: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            secret: secret.into(),
        }
    }

    /// Store at `~/.bollard-striker/<filename>` with the built-in secret.
    /// Falls back to a file in the working directory when the game
    /// directory is unavailable.
    pub fn open_or_local(filename: &str) -> Self {
        Self::in_dir_or_local(game_dir(), filename)
    }

    fn in_dir_or_local(dir: io::Result<PathBuf>, filename: &str) -> Self {
        let filename = leaderboard_file_name(filename);
        match dir {
            Ok(dir) => Self::new(dir.join(filename), LEADERBOARD_SECRET),
            Err(e) => {
                log::warn!(
                    "Game directory unavailable ({}), keeping the leaderboard in ./{}",
                    e,
                    filename
                );
                Self::new(filename, LEADERBOARD_SECRET)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and verify the file.
    ///
    /// A missing file is an empty leaderboard. Anything else that goes wrong
    /// (unreadable, malformed, digest mismatch) is an error.
    pub fn read_verified(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LeaderboardError::Io(e)),
        };

        let raw: RawLeaderboardFile =
            serde_json::from_str(&json).map_err(LeaderboardError::Parse)?;

        let computed = digest_value(&raw.entries, &self.secret);
        if !computed.eq_ignore_ascii_case(raw.hash.trim()) {
            return Err(LeaderboardError::Tampered {
                stored: raw.hash,
                computed,
            });
        }

        serde_json::from_value(raw.entries).map_err(LeaderboardError::Parse)
    }

    /// Verified entries, or an empty list if the file cannot be trusted.
    ///
    /// Never fails: problems are reported on the log instead.
    pub fn load(&self) -> Vec<LeaderboardEntry> {
        match self.read_verified() {
            Ok(entries) => {
                log::debug!(
                    "Loaded {} leaderboard entries from {}",
                    entries.len(),
                    self.path.display()
                );
                entries
            }
            Err(e @ LeaderboardError::Tampered { .. }) => {
                log::warn!(
                    "Leaderboard at {} failed its integrity check, ignoring it: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
            Err(e) => {
                log::warn!(
                    "Leaderboard at {} is unreadable, starting fresh: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Write exactly these entries with a fresh digest.
    pub fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        let hash = compute_digest(entries, &self.secret).map_err(LeaderboardError::Serialize)?;
        let file = LeaderboardFile {
            entries: entries.to_vec(),
            hash,
        };
        let json = serde_json::to_string_pretty(&file).map_err(LeaderboardError::Serialize)?;
        write_atomic(&self.path, json.as_bytes())?;
        log::info!(
            "Saved {} leaderboard entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Record a finished session stamped with the current UTC time.
    pub fn update(
        &self,
        name: &str,
        score: u64,
        level: u32,
    ) -> Result<UpdateOutcome, LeaderboardError> {
        let entry = LeaderboardEntry {
            name: sanitize_name(name),
            score,
            level,
            date: Utc::now().format(LEADERBOARD_DATE_FORMAT).to_string(),
        };
        self.insert(entry)
    }

    /// Merge one entry into the verified entries and persist the top N.
    ///
    /// If the current file fails verification the merge starts from an
    /// empty list; unverified entries are never written back.
    pub fn insert(&self, entry: LeaderboardEntry) -> Result<UpdateOutcome, LeaderboardError> {
        let (entries, rank) = rank_entries(self.load(), entry);
        self.save(&entries)?;
        Ok(UpdateOutcome { entries, rank })
    }
}

/// Append, sort best-first (stable, so ties keep their order), truncate.
/// Returns the kept entries and the new entry's 1-based rank.
pub fn rank_entries(
    existing: Vec<LeaderboardEntry>,
    entry: LeaderboardEntry,
) -> (Vec<LeaderboardEntry>, Option<usize>) {
    let new_index = existing.len();
    let mut tagged: Vec<(usize, LeaderboardEntry)> =
        existing.into_iter().chain(Some(entry)).enumerate().collect();

    tagged.sort_by(|a, b| b.1.score.cmp(&a.1.score));
    tagged.truncate(LEADERBOARD_CAPACITY);

    let rank = tagged
        .iter()
        .position(|(i, _)| *i == new_index)
        .map(|pos| pos + 1);
    (tagged.into_iter().map(|(_, e)| e).collect(), rank)
}

/// The configured file name if it is a single plain file name, otherwise
/// the default. Keeps the board inside the game directory.
pub fn leaderboard_file_name(configured: &str) -> &str {
    let configured = configured.trim();
    let mut components = Path::new(configured).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => configured,
        (None, _) => LEADERBOARD_FILENAME,
        _ => {
            log::warn!(
                "Ignoring leaderboard file {:?}: must be a plain file name",
                configured
            );
            LEADERBOARD_FILENAME
        }
    }
}

/// Trim and cap at the name length limit. Blank names become "Anonymous".
pub fn sanitize_name(name: &str) -> String {
    let trimmed: String = name.trim().chars().take(MAX_NAME_LEN).collect();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        "Anonymous".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(name: &str, score: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            level: 1,
            date: "2024-05-01 12:00:00".to_string(),
        }
    }

    fn temp_store() -> (TempDir, LeaderboardStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = LeaderboardStore::new(dir.path().join("leaderboard.json"), "test-secret");
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.read_verified().unwrap().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(
            store.read_verified(),
            Err(LeaderboardError::Parse(_))
        ));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_legacy_bare_array_is_rejected() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"[{"name":"ann","score":3}]"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = temp_store();
        let entries = vec![entry("ann", 30), entry("bob", 20)];
        store.save(&entries).unwrap();
        assert_eq!(store.load(), entries);
    }

    #[test]
    fn test_wrong_secret_is_tampered() {
        let (dir, store) = temp_store();
        store.save(&[entry("ann", 30)]).unwrap();
        let other = LeaderboardStore::new(dir.path().join("leaderboard.json"), "other");
        assert!(matches!(
            other.read_verified(),
            Err(LeaderboardError::Tampered { .. })
        ));
        assert!(other.load().is_empty());
    }

    #[test]
    fn test_edited_score_is_tampered() {
        let (_dir, store) = temp_store();
        store.save(&[entry("ann", 30)]).unwrap();
        let json = fs::read_to_string(store.path()).unwrap();
        fs::write(store.path(), json.replace("\"score\": 30", "\"score\": 99")).unwrap();
        assert!(matches!(
            store.read_verified(),
            Err(LeaderboardError::Tampered { .. })
        ));
    }

    #[test]
    fn test_reformatted_file_still_verifies() {
        let (_dir, store) = temp_store();
        let entries = vec![entry("ann", 30)];
        store.save(&entries).unwrap();
        let value: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        fs::write(store.path(), serde_json::to_string(&value).unwrap()).unwrap();
        assert_eq!(store.load(), entries);
    }

    #[test]
    fn test_update_keeps_top_five_sorted() {
        let (_dir, store) = temp_store();
        for (i, score) in [5u64, 50, 20, 1, 40, 30, 10].iter().enumerate() {
            store.update(&format!("p{}", i), *score, 1).unwrap();
        }
        let scores: Vec<u64> = store.load().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![50, 40, 30, 20, 10]);
    }

    #[test]
    fn test_update_reports_rank() {
        let (_dir, store) = temp_store();
        store.save(&[entry("a", 100), entry("b", 50)]).unwrap();
        let outcome = store.update("c", 70, 3).unwrap();
        assert_eq!(outcome.rank, Some(2));
        assert_eq!(outcome.entries[1].name, "c");
        assert_eq!(outcome.entries[1].level, 3);
        assert_eq!(outcome.entries[1].date.len(), 19);
    }

    #[test]
    fn test_update_after_tamper_starts_fresh() {
        let (_dir, store) = temp_store();
        store.save(&[entry("ann", 30), entry("bob", 20)]).unwrap();
        let json = fs::read_to_string(store.path()).unwrap();
        fs::write(store.path(), json.replace("\"bob\"", "\"eve\"")).unwrap();

        let outcome = store.update("cat", 5, 1).unwrap();
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].name, "cat");
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_file_name_must_stay_in_game_dir() {
        assert_eq!(leaderboard_file_name("scores.json"), "scores.json");
        assert_eq!(leaderboard_file_name("  "), LEADERBOARD_FILENAME);
        assert_eq!(leaderboard_file_name("/tmp/board.json"), LEADERBOARD_FILENAME);
        assert_eq!(leaderboard_file_name("../board.json"), LEADERBOARD_FILENAME);
        assert_eq!(leaderboard_file_name("sub/board.json"), LEADERBOARD_FILENAME);
        assert_eq!(leaderboard_file_name(".."), LEADERBOARD_FILENAME);
    }

    #[test]
    fn test_missing_game_dir_falls_back_to_working_dir() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no home");
        let store = LeaderboardStore::in_dir_or_local(Err(err), "scores.json");
        assert_eq!(store.path(), Path::new("scores.json"));

        let err = io::Error::new(io::ErrorKind::NotFound, "no home");
        let store = LeaderboardStore::in_dir_or_local(Err(err), "../escape.json");
        assert_eq!(store.path(), Path::new(LEADERBOARD_FILENAME));
    }

    #[test]
    fn test_game_dir_store_works() {
        let dir = TempDir::new().unwrap();
        let store = LeaderboardStore::in_dir_or_local(Ok(dir.path().to_path_buf()), "scores.json");
        assert_eq!(store.path(), dir.path().join("scores.json"));
        let outcome = store.update("ann", 12, 2).unwrap();
        assert_eq!(outcome.rank, Some(1));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let existing = vec![entry("first", 10), entry("second", 10)];
        let (entries, rank) = rank_entries(existing, entry("third", 10));
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(rank, Some(3));
    }

    #[test]
    fn test_rank_none_when_cut() {
        let existing: Vec<_> = (0..5).map(|i| entry("x", 100 + i)).collect();
        let (entries, rank) = rank_entries(existing, entry("low", 1));
        assert_eq!(entries.len(), LEADERBOARD_CAPACITY);
        assert_eq!(rank, None);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (dir, store) = temp_store();
        store.update("ann", 3, 1).unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["leaderboard.json".to_string()]);
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  ann  "), "ann");
        assert_eq!(sanitize_name("   "), "Anonymous");
        assert_eq!(sanitize_name(&"x".repeat(30)).chars().count(), MAX_NAME_LEN);
    }
}

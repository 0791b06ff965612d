use tracing::{debug, info, warn};

use crate::config::leaderboard::STORAGE_KEY;
use crate::error::{Error, Result};
use crate::level::LevelKey;
use crate::score::{LeaderboardView, LevelScoreTable, ScoreEntry};
use crate::storage::KeyValueStore;

/// Outcome of recording one completion
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedScore {
    pub level: LevelKey,
    pub entry: ScoreEntry,
    /// Zero-based position of the new entry, `None` if it did not make the cut
    pub rank: Option<usize>,
    /// The level's ranking after the insert
    pub scores: Vec<ScoreEntry>,
}

/// Leaderboard bound to durable storage
///
/// The whole table lives under one storage key and is written through on
/// every change. The in-memory table only changes after the write succeeded,
/// so memory and storage never disagree.
#[derive(Debug)]
pub struct ScoreStore<S> {
    storage: S,
    key: String,
    table: LevelScoreTable,
}

impl<S: KeyValueStore> ScoreStore<S> {
    /// Load the leaderboard saved under the default key.
    ///
    /// Missing, unreadable or corrupt data gives an empty leaderboard.
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, STORAGE_KEY)
    }

    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let content = match storage.get(&key) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read saved leaderboard {:?}: {}", key, e);
                None
            }
        };
        let table = LevelScoreTable::from_persisted_or_empty(content.as_deref());
        debug!(
            "Loaded leaderboard {:?} with {} level(s)",
            key,
            table.level_count()
        );

        Self {
            storage,
            key,
            table,
        }
    }

    /// Record a completion and return the level's updated ranking.
    pub fn record_completion(
        &mut self,
        level: LevelKey,
        seconds: f64,
    ) -> Result<Vec<ScoreEntry>> {
        self.record_completion_ranked(level, seconds)
            .map(|recorded| recorded.scores)
    }

    /// Record a completion, also reporting where the new time ranked.
    ///
    /// Fails with `InvalidInput` for a non-positive or non-finite time
    /// (nothing is touched) and with `PersistenceFailure` if the write fails
    /// (the previous ranking is kept).
    pub fn record_completion_ranked(
        &mut self,
        level: LevelKey,
        seconds: f64,
    ) -> Result<RecordedScore> {
        let entry = ScoreEntry::new(seconds)?;

        let mut next = self.table.clone();
        let rank = next.insert(level, entry);
        self.persist(&next)?;
        self.table = next;

        match rank {
            Some(rank) => info!("{} completed in {} (rank {})", level, entry, rank + 1),
            None => info!("{} completed in {} (not ranked)", level, entry),
        }

        Ok(RecordedScore {
            level,
            entry,
            rank,
            scores: self.scores_for(level),
        })
    }

    /// Copy of the ranking for `level`; empty if nothing was recorded.
    pub fn scores_for(&self, level: LevelKey) -> Vec<ScoreEntry> {
        self.table.get(level).to_vec()
    }

    /// Empty the leaderboard and persist the empty table.
    pub fn clear(&mut self) -> Result<()> {
        let empty = LevelScoreTable::new();
        self.persist(&empty)?;
        self.table = empty;
        info!("Leaderboard cleared");
        Ok(())
    }

    /// Display projection of levels `0..level_count`.
    pub fn render(&self, level_count: usize) -> LeaderboardView {
        LeaderboardView::from_table(&self.table, level_count)
    }

    /// Board for a single level, whatever its index
    pub fn render_level(&self, level: LevelKey) -> LeaderboardView {
        LeaderboardView::single(&self.table, level)
    }

    pub fn table(&self) -> &LevelScoreTable {
        &self.table
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, table: &LevelScoreTable) -> Result<()> {
        let encoded = table.to_json().map_err(Error::into_persistence_failure)?;
        self.storage.set(&self.key, &encoded).map_err(|e| {
            warn!("Failed to save leaderboard {:?}: {}", self.key, e);
            e.into_persistence_failure()
        })
    }
}

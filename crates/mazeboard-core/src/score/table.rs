use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::leaderboard::MAX_ENTRIES;
use crate::error::Result;
use crate::level::LevelKey;
use crate::score::ScoreEntry;

/// Serialized leaderboard: `{"level1": [9.87, 12.34], "level2": [...]}`
///
/// Keys are 1-based level names, values are ascending completion times.
/// Level order inside the object is not significant; entry order is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedState {
    pub levels: BTreeMap<String, Vec<f64>>,
}

/// Per-level top-5 rankings
///
/// Each level's entries are sorted fastest first and capped at
/// [`MAX_ENTRIES`]. Levels without completions are absent from the map and
/// read as an empty slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelScoreTable {
    levels: BTreeMap<LevelKey, Vec<ScoreEntry>>,
}

impl LevelScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranked entries for `level`, empty if none were recorded
    pub fn get(&self, level: LevelKey) -> &[ScoreEntry] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Insert an entry into its level's ranking and drop anything past the cap.
    ///
    /// Equal times keep insertion order: the new entry goes after every
    /// existing entry that is not slower, which is what appending and
    /// stable-sorting would produce. Returns the zero-based rank of the new
    /// entry, or `None` if it fell off the end.
    pub fn insert(&mut self, level: LevelKey, entry: ScoreEntry) -> Option<usize> {
        let entries = self.levels.entry(level).or_default();
        let position =
            entries.partition_point(|existing| existing.rank_cmp(&entry) != Ordering::Greater);
        entries.insert(position, entry);
        entries.truncate(MAX_ENTRIES);

        (position < MAX_ENTRIES).then_some(position)
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// True when no level has any completion
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of levels with at least one completion
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LevelKey, &[ScoreEntry])> {
        self.levels
            .iter()
            .map(|(level, entries)| (*level, entries.as_slice()))
    }

    pub fn to_persisted(&self) -> PersistedState {
        let levels = self
            .levels
            .iter()
            .map(|(level, entries)| {
                let times = entries.iter().map(ScoreEntry::seconds).collect();
                (level.storage_key(), times)
            })
            .collect();
        PersistedState { levels }
    }

    /// Build a table from persisted data, repairing what can be repaired.
    ///
    /// Unknown keys are skipped, invalid times are dropped, and every level is
    /// re-sorted and capped, so the result always satisfies the table
    /// invariants.
    pub fn from_persisted(state: PersistedState) -> Self {
        let mut levels = BTreeMap::new();

        for (key, times) in state.levels {
            let Some(level) = LevelKey::from_storage_key(&key) else {
                warn!("Ignoring unrecognized leaderboard key {:?}", key);
                continue;
            };

            let total = times.len();
            let mut entries: Vec<ScoreEntry> = times
                .into_iter()
                .filter_map(|seconds| ScoreEntry::new(seconds).ok())
                .collect();
            if entries.len() < total {
                warn!(
                    "Dropped {} invalid time(s) for {}",
                    total - entries.len(),
                    level
                );
            }

            entries.sort_by(ScoreEntry::rank_cmp);
            entries.truncate(MAX_ENTRIES);
            if !entries.is_empty() {
                levels.insert(level, entries);
            }
        }

        Self { levels }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_persisted())?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let state: PersistedState = serde_json::from_str(content)?;
        Ok(Self::from_persisted(state))
    }

    /// Recovery path for loading: absent or corrupt data means "no scores yet".
    ///
    /// Never fails. Anything that does not decode as an object of number
    /// arrays is discarded with a warning.
    pub fn from_persisted_or_empty(content: Option<&str>) -> Self {
        let Some(content) = content else {
            debug!("No saved leaderboard, starting empty");
            return Self::new();
        };

        match Self::from_json(content) {
            Ok(table) => table,
            Err(e) => {
                warn!("Saved leaderboard is corrupt ({}), starting empty", e);
                Self::new()
            }
        }
    }
}

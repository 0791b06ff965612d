use serde::Serialize;

use crate::level::LevelKey;
use crate::score::{LevelScoreTable, ScoreEntry};

/// Display-ready leaderboard for a fixed number of levels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub levels: Vec<LevelBoard>,
}

/// One level's heading and formatted times, fastest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelBoard {
    pub level: LevelKey,
    pub label: String,
    pub times: Vec<String>,
}

impl LeaderboardView {
    /// Project `level_count` levels (index 0 up) out of a table.
    ///
    /// Levels without completions appear with an empty list.
    pub fn from_table(table: &LevelScoreTable, level_count: usize) -> Self {
        let count = u32::try_from(level_count).unwrap_or(u32::MAX);
        let levels = (0..count)
            .map(|index| LevelBoard::from_table(table, LevelKey::new(index)))
            .collect();
        Self { levels }
    }

    /// Projection holding only `level`
    pub fn single(table: &LevelScoreTable, level: LevelKey) -> Self {
        Self {
            levels: vec![LevelBoard::from_table(table, level)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(|board| board.times.is_empty())
    }
}

impl LevelBoard {
    pub fn from_table(table: &LevelScoreTable, level: LevelKey) -> Self {
        Self {
            level,
            label: level.label(),
            times: table.get(level).iter().map(ScoreEntry::to_string).collect(),
        }
    }
}

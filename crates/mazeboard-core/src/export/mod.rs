//! Export formats for the leaderboard.

mod console;

pub use console::format_leaderboard_console;

use std::fmt::Write as _;

use crate::error::Result;
use crate::level::LevelKey;
use crate::score::{LeaderboardView, LevelScoreTable};

pub fn format_tsv_header() -> String {
    ["level", "rank", "seconds"].join("\t")
}

/// Leaderboard as TSV, one row per ranked time
///
/// Levels are 1-based and only `0..level_count` are exported.
pub fn format_leaderboard_tsv(table: &LevelScoreTable, level_count: usize) -> String {
    let mut output = format_tsv_header();
    let count = u32::try_from(level_count).unwrap_or(u32::MAX);

    for level in (0..count).map(LevelKey::new) {
        for (rank, entry) in table.get(level).iter().enumerate() {
            let _ = write!(
                output,
                "\n{}\t{}\t{}",
                level.number(),
                rank + 1,
                entry.format_seconds()
            );
        }
    }

    output
}

/// Display projection as pretty JSON
pub fn format_leaderboard_json(view: &LeaderboardView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

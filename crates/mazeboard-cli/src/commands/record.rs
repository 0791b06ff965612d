//! Record command for adding a completion time.

use anyhow::{Context, Result};
use mazeboard_core::config::leaderboard::MAX_ENTRIES;
use mazeboard_core::{KeyValueStore, LevelKey, ScoreStore, format_leaderboard_console};
use tracing::warn;

use crate::config::Config;

/// Record one completion and print the level's ranking
pub fn run<S: KeyValueStore>(
    store: &mut ScoreStore<S>,
    config: &Config,
    level_number: i64,
    seconds: f64,
) -> Result<()> {
    let level = LevelKey::from_number(level_number)?;
    if usize::try_from(level.index()).map_or(true, |index| index >= config.level_count) {
        warn!(
            "{} is beyond the {} configured level(s); recording anyway",
            level, config.level_count
        );
    }

    let recorded = store
        .record_completion_ranked(level, seconds)
        .context("failed to record completion")?;

    match recorded.rank {
        Some(rank) => println!(
            "{} completed in {} - rank {} of {}",
            level,
            recorded.entry,
            rank + 1,
            recorded.scores.len()
        ),
        None => println!(
            "{} completed in {} - not in the top {}",
            level, recorded.entry, MAX_ENTRIES
        ),
    }

    print!("{}", format_leaderboard_console(&store.render_level(level)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeboard_core::MemoryStore;

    #[test]
    fn test_record_highest_level_number() {
        let mut store = ScoreStore::load(MemoryStore::new());

        run(&mut store, &Config::default(), 4_294_967_296, 1.5).unwrap();

        let level = LevelKey::new(u32::MAX);
        assert_eq!(store.scores_for(level).len(), 1);
        assert_eq!(
            store.storage().raw("mazeGameLeaderboard"),
            Some(r#"{"level4294967296":[1.5]}"#)
        );
    }

    #[test]
    fn test_record_rejects_level_zero() {
        let mut store = ScoreStore::load(MemoryStore::new());
        assert!(run(&mut store, &Config::default(), 0, 1.5).is_err());
        assert!(store.table().is_empty());
    }
}

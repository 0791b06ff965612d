//! Show command for displaying the leaderboard.

use anyhow::Result;
use mazeboard_core::{
    KeyValueStore, LevelKey, ScoreStore, format_leaderboard_console, format_leaderboard_json,
};

use crate::config::Config;

/// Print the board for every configured level, or a single one
pub fn run<S: KeyValueStore>(
    store: &ScoreStore<S>,
    config: &Config,
    level_number: Option<i64>,
    json: bool,
) -> Result<()> {
    let view = match level_number {
        Some(number) => store.render_level(LevelKey::from_number(number)?),
        None => store.render(config.level_count),
    };

    if json {
        println!("{}", format_leaderboard_json(&view)?);
    } else {
        print!("{}", format_leaderboard_console(&view));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeboard_core::MemoryStore;

    #[test]
    fn test_single_level_view() {
        let mut store = ScoreStore::load(MemoryStore::new());
        store.record_completion(LevelKey::new(1), 4.0).unwrap();
        store.record_completion(LevelKey::new(0), 9.0).unwrap();

        let view = store.render_level(LevelKey::new(1));

        assert_eq!(view.levels.len(), 1);
        assert_eq!(view.levels[0].label, "Level 2");
        assert_eq!(view.levels[0].times, vec!["4.00 seconds"]);
    }

    #[test]
    fn test_show_highest_level_number() {
        let mut store = ScoreStore::load(MemoryStore::new());
        let level = LevelKey::from_number(4_294_967_296).unwrap();
        store.record_completion(level, 1.5).unwrap();

        run(&store, &Config::default(), Some(4_294_967_296), true).unwrap();

        let view = store.render_level(level);
        assert_eq!(view.levels.len(), 1);
        assert_eq!(view.levels[0].times, vec!["1.50 seconds"]);
    }
}

//! Clear command for resetting the leaderboard.

use anyhow::{Context, Result, bail};
use mazeboard_core::{KeyValueStore, ScoreStore};

/// Erase every recorded time; needs explicit confirmation
pub fn run<S: KeyValueStore>(store: &mut ScoreStore<S>, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("Refusing to clear the leaderboard without --yes");
    }

    store.clear().context("failed to clear leaderboard")?;
    println!("Leaderboard cleared");
    Ok(())
}

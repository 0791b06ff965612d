//! Leaderboard types and the score store.
//!
//! This module contains the ranked-score data model:
//! - `ScoreEntry` - one validated completion time
//! - `LevelScoreTable` - per-level top-5 rankings and their persisted form
//! - `ScoreStore` - the table bound to durable storage
//! - `LeaderboardView` - display-ready projection of the table

mod entry;
mod store;
mod table;
mod view;

pub use entry::*;
pub use store::*;
pub use table::*;
pub use view::*;

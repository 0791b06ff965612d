//! # mazeboard-core
//!
//! Leaderboard library for the maze game.
//!
//! This crate provides:
//! - Per-level top-5 completion time rankings (`ScoreStore`)
//! - Durable key-value storage backends (file and in-memory)
//! - Display projection and TSV/JSON/console export of the leaderboard
//! - Level catalog and run session bookkeeping that feeds completions in

pub mod config;
pub mod error;
pub mod export;
pub mod level;
pub mod score;
pub mod session;
pub mod storage;

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{format_leaderboard_console, format_leaderboard_json, format_leaderboard_tsv};

// Re-export from level module
pub use level::{Difficulty, LevelCatalog, LevelInfo, LevelKey};

// Re-export from score module
pub use score::{
    LeaderboardView, LevelBoard, LevelScoreTable, PersistedState, RecordedScore, ScoreEntry,
    ScoreStore,
};

// Re-export from session module
pub use session::{GameState, LevelOutcome, RunSession};

// Re-export from storage module
pub use storage::{FileStore, KeyValueStore, MemoryStore};

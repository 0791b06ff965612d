//! Leaderboard and level configuration constants.
//!
//! - `leaderboard` - ranking capacity and the storage key
//! - `levels` - size of the default level catalog
//! - `display` - formatting of completion times

/// Ranked score storage.
pub mod leaderboard {
    /// Maximum number of completion times kept per level.
    pub const MAX_ENTRIES: usize = 5;

    /// Key holding the whole serialized table in the key-value store.
    pub const STORAGE_KEY: &str = "mazeGameLeaderboard";

    /// Prefix of per-level keys in the serialized table ("level1", "level2", ...).
    pub const LEVEL_KEY_PREFIX: &str = "level";
}

/// Level catalog.
pub mod levels {
    /// Number of levels shipped with the game (Easy, Medium, Hard).
    pub const DEFAULT_LEVEL_COUNT: usize = 3;
}

/// Display formatting.
pub mod display {
    /// Decimal places used when rendering completion times.
    pub const TIME_PRECISION: usize = 2;

    /// Unit suffix appended to rendered completion times.
    pub const TIME_UNIT: &str = "seconds";
}

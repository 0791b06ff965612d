//! Level identifiers and the level catalog.

mod catalog;

pub use catalog::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::leaderboard::LEVEL_KEY_PREFIX;
use crate::error::{Error, Result};

/// Zero-based level index.
///
/// Shown 1-based everywhere a user sees it: labels read "Level 1" and the
/// persisted table uses "level1" for index 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LevelKey(u32);

impl LevelKey {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Build from the 1-based number shown to players.
    pub fn from_number(number: i64) -> Result<Self> {
        if number < 1 {
            return Err(Error::InvalidInput(format!(
                "level number must be 1 or greater, got {}",
                number
            )));
        }
        Self::try_from(number - 1)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    pub fn number(&self) -> u64 {
        u64::from(self.0) + 1
    }

    /// Human-facing label, e.g. "Level 1".
    pub fn label(&self) -> String {
        format!("Level {}", self.number())
    }

    /// Key used for this level in the persisted table, e.g. "level1".
    pub fn storage_key(&self) -> String {
        format!("{}{}", LEVEL_KEY_PREFIX, self.number())
    }

    /// Parse a persisted table key ("level1" -> index 0).
    ///
    /// Returns `None` for anything that is not the prefix followed by a
    /// positive decimal number without leading zeros, so every level has
    /// exactly one key.
    pub fn from_storage_key(key: &str) -> Option<Self> {
        let digits = key.strip_prefix(LEVEL_KEY_PREFIX)?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let number: u64 = digits.parse().ok()?;
        let index = number.checked_sub(1)?;
        u32::try_from(index).ok().map(Self)
    }
}

impl From<u32> for LevelKey {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl TryFrom<i64> for LevelKey {
    type Error = Error;

    fn try_from(index: i64) -> Result<Self> {
        u32::try_from(index).map(Self).map_err(|_| {
            Error::InvalidInput(format!(
                "level index must be a non-negative integer, got {}",
                index
            ))
        })
    }
}

impl FromStr for LevelKey {
    type Err = Error;

    /// Parse a zero-based index; rejects signs, fractions and garbage.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let index: i64 = trimmed.parse().map_err(|_| {
            Error::InvalidInput(format!(
                "level index must be a non-negative integer, got {:?}",
                s
            ))
        })?;
        Self::try_from(index)
    }
}

impl fmt::Display for LevelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::display::{TIME_PRECISION, TIME_UNIT};
use crate::error::{Error, Result};

/// A level completion time in seconds
///
/// Always finite and strictly positive. Entries are plain values and are
/// never modified once recorded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScoreEntry(f64);

impl ScoreEntry {
    pub fn new(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "completion time must be a finite number of seconds greater than zero, got {}",
                seconds
            )));
        }
        Ok(Self(seconds))
    }

    pub fn from_duration(elapsed: Duration) -> Result<Self> {
        Self::new(elapsed.as_secs_f64())
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Time with fixed precision and no unit, e.g. "12.34"
    pub fn format_seconds(&self) -> String {
        format!("{:.*}", TIME_PRECISION, self.0)
    }

    /// Ranking order: faster first
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for ScoreEntry {
    type Error = Error;

    fn try_from(seconds: f64) -> Result<Self> {
        Self::new(seconds)
    }
}

impl From<ScoreEntry> for f64 {
    fn from(entry: ScoreEntry) -> Self {
        entry.0
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_seconds(), TIME_UNIT)
    }
}

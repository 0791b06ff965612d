use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::level::{LevelCatalog, LevelInfo, LevelKey};
use crate::score::{RecordedScore, ScoreStore};
use crate::session::GameState;
use crate::storage::KeyValueStore;

/// Result of reaching a level's exit
#[derive(Debug, Clone, PartialEq)]
pub struct LevelOutcome {
    pub recorded: RecordedScore,
    /// Level to play next, `None` once the last level is done
    pub next_level: Option<LevelKey>,
}

impl LevelOutcome {
    pub fn game_completed(&self) -> bool {
        self.next_level.is_none()
    }
}

/// One playthrough of the level catalog
///
/// MainMenu -> Playing -> (next level) MainMenu -> ... -> Completed.
/// Time is passed in by the caller so the frame loop owns the clock.
#[derive(Debug, Clone)]
pub struct RunSession {
    catalog: LevelCatalog,
    current: LevelKey,
    state: GameState,
    started_at: Option<Instant>,
}

impl RunSession {
    pub fn new(catalog: LevelCatalog) -> Self {
        Self {
            catalog,
            current: LevelKey::default(),
            state: GameState::MainMenu,
            started_at: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_level(&self) -> LevelKey {
        self.current
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn current_info(&self) -> Option<&LevelInfo> {
        self.catalog.get(self.current)
    }

    /// HUD label, e.g. "Level: 1 - Easy"
    pub fn level_info_label(&self) -> Option<String> {
        self.current_info()
            .map(|info| format!("Level: {} - {}", self.current.number(), info.name))
    }

    /// Begin timing the current level.
    pub fn start_level(&mut self, now: Instant) -> Result<LevelKey> {
        if self.state != GameState::MainMenu {
            return Err(Error::InvalidGameState(format!(
                "cannot start a level while {}",
                self.state
            )));
        }
        if self.current_info().is_none() {
            return Err(Error::InvalidGameState(format!(
                "{} is not in the level catalog",
                self.current
            )));
        }

        self.state = GameState::Playing;
        self.started_at = Some(now);
        debug!("Started {}", self.current);
        Ok(self.current)
    }

    /// Time spent on the current level so far; `None` unless playing.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        match (self.state, self.started_at) {
            (GameState::Playing, Some(started)) => Some(now.saturating_duration_since(started)),
            _ => None,
        }
    }

    /// The player reached the exit: record the time and move on.
    ///
    /// If the store rejects the time the session stays on the level with its
    /// timer running, and the error is returned as is.
    pub fn finish_level<S: KeyValueStore>(
        &mut self,
        store: &mut ScoreStore<S>,
        now: Instant,
    ) -> Result<LevelOutcome> {
        let elapsed = self.elapsed(now).ok_or_else(|| {
            Error::InvalidGameState(format!("cannot finish a level while {}", self.state))
        })?;

        let recorded = store.record_completion_ranked(self.current, elapsed.as_secs_f64())?;
        debug!("Finished {} after {:?}", self.current, elapsed);

        self.started_at = None;
        let next = LevelKey::new(self.current.index().saturating_add(1));
        let next_level = if self.catalog.get(next).is_some() {
            self.current = next;
            self.state = GameState::MainMenu;
            Some(next)
        } else {
            self.state = GameState::Completed;
            info!("All {} levels completed", self.catalog.len());
            None
        };

        Ok(LevelOutcome {
            recorded,
            next_level,
        })
    }

    /// Go back to the first level after completing the game.
    pub fn restart(&mut self) -> Result<()> {
        if self.state != GameState::Completed {
            return Err(Error::InvalidGameState(format!(
                "cannot restart while {}",
                self.state
            )));
        }
        self.current = LevelKey::default();
        self.state = GameState::MainMenu;
        self.started_at = None;
        Ok(())
    }
}

impl Default for RunSession {
    fn default() -> Self {
        Self::new(LevelCatalog::default())
    }
}

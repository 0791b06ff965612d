use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::level::LevelKey;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Maze asset loaded by the renderer for this difficulty
    pub fn maze_asset(&self) -> &'static str {
        match self {
            Self::Easy => "maze_easy.gltf",
            Self::Medium => "maze_medium.gltf",
            Self::Hard => "maze_hard.gltf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub name: String,
    pub maze: String,
}

impl From<Difficulty> for LevelInfo {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            name: difficulty.as_str().to_string(),
            maze: difficulty.maze_asset().to_string(),
        }
    }
}

/// Ordered list of levels a run goes through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<LevelInfo>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelInfo>) -> Self {
        Self { levels }
    }

    pub fn get(&self, level: LevelKey) -> Option<&LevelInfo> {
        usize::try_from(level.index())
            .ok()
            .and_then(|index| self.levels.get(index))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LevelKey, &LevelInfo)> {
        self.levels
            .iter()
            .enumerate()
            .map_while(|(i, info)| u32::try_from(i).ok().map(|i| (LevelKey::new(i), info)))
    }
}

impl Default for LevelCatalog {
    /// Easy, Medium, Hard
    fn default() -> Self {
        Self::new(Difficulty::iter().map(LevelInfo::from).collect())
    }
}

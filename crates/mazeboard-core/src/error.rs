use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to persist leaderboard: {0}")]
    PersistenceFailure(String),

    #[error("Invalid game state: {0}")]
    InvalidGameState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Error::PersistenceFailure(_))
    }

    /// Wrap any storage-side failure as a persistence failure.
    pub(crate) fn into_persistence_failure(self) -> Self {
        match self {
            Error::PersistenceFailure(_) => self,
            other => Error::PersistenceFailure(other.to_string()),
        }
    }
}

//! The store trait, its error type, and the in-memory backend.

use thiserror::Error;

/// Storage failure.
///
/// Only backends with real I/O produce these; the engine treats a read
/// failure as "no best score recorded" and logs a write failure rather
/// than aborting a won game.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying I/O operation failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted record could not be decoded.
    #[error("stored best score is corrupt: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience alias for storage results.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Capability for persisting the best score.
///
/// Contract: read-your-writes within a session; persistent backends also
/// survive across sessions.
pub trait BestScoreStore {
    /// The recorded best score, or `None` if none has been recorded.
    fn best_score(&self) -> Result<Option<u32>>;

    /// Record a new best score.
    fn set_best_score(&mut self, score: u32) -> Result<()>;
}

/// Process-local store. For tests and shells that do not persist.
#[derive(Clone, Copy, Debug, Default)]
pub struct InMemoryStore {
    best: Option<u32>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a pre-recorded best score.
    #[must_use]
    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }
}

impl BestScoreStore for InMemoryStore {
    fn best_score(&self) -> Result<Option<u32>> {
        Ok(self.best)
    }

    fn set_best_score(&mut self, score: u32) -> Result<()> {
        self.best = Some(score);
        Ok(())
    }
}

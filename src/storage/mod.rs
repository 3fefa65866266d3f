//! Best-score persistence capability.
//!
//! Lower is better: the best score is the fewest valid flips ever taken to
//! finish a board. Absence of a recorded score is a valid state, not an
//! error, and is modeled as `None`; a stored score of 0 is a real value.

pub mod file;
pub mod store;

pub use file::FileStore;
pub use store::{BestScoreStore, InMemoryStore, Result, StorageError};

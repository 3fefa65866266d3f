//! # memory-pairs
//!
//! A memory-matching (concentration) game engine.
//!
//! A deck of paired symbols is shuffled face-down; the player flips two
//! cards at a time looking for matches. The engine owns the deck, the
//! selection, the score, and win detection. Everything else is a
//! capability the embedding shell provides.
//!
//! ## Design Principles
//!
//! 1. **Capabilities at the seams**: rendering ([`RenderSink`]), timing
//!    ([`Scheduler`]), and persistence ([`BestScoreStore`]) are traits.
//!    The engine never touches a screen, a clock, or a disk directly.
//!
//! 2. **Deterministic when seeded**: the shuffle runs on a seeded ChaCha8
//!    RNG, so a fixed seed reproduces the same board for tests and replays.
//!
//! 3. **Permissive input policy**: invalid moves (clicking a matched card,
//!    a face-up card, a third card while two are pending) are silent no-ops
//!    with zero observable side effects. This is policy, not an oversight.
//!
//! ## Modules
//!
//! - `core`: Card and symbol types, deck construction, RNG
//! - `engine`: Configuration, commands, render events, timers, the
//!   `GameEngine` state machine
//! - `storage`: Best-score persistence capability and backends

pub mod core;
pub mod engine;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{Card, CardId, Deck, GameRng, Symbol};

pub use crate::engine::{
    Command, GameConfig, GameEngine, GridPosition, ManualScheduler, NullSink, Phase,
    RecordingSink, RenderEvent, RenderSink, Scheduler, TimerToken,
};

pub use crate::storage::{BestScoreStore, FileStore, InMemoryStore, StorageError};

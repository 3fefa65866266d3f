//! Core game types: cards, symbols, the deck, and deterministic RNG.
//!
//! These are plain data types with no knowledge of rendering, timing, or
//! persistence. The engine module drives them.

pub mod card;
pub mod deck;
pub mod rng;

pub use card::{Card, CardId, Symbol};
pub use deck::Deck;
pub use rng::GameRng;

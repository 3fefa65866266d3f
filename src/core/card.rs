//! Card identity and per-card state.
//!
//! A `Card` carries an explicit `Symbol` used for match comparison. The
//! symbol is game data, never a presentation identifier: how a symbol is
//! drawn (image path, CSS class, glyph) is the UI shell's business.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on the board.
///
/// Ids are assigned at deck-build time, before shuffling, and stay attached
/// to their card for the whole session. The UI addresses cards by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for CardId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A match symbol. Two cards match when their symbols are equal.
///
/// Opaque to the engine: it is only ever compared for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card on the board.
///
/// Created at deck-build time, mutated by flip and resolve operations,
/// discarded wholesale on reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier, assigned before the shuffle.
    pub id: CardId,

    /// Match symbol. Exactly one other card in the deck shares it.
    pub symbol: Symbol,

    /// Is the card currently showing its symbol?
    pub face_up: bool,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Can this card be selected right now?
    ///
    /// Face-up and matched cards are not selectable; clicking them is a
    /// no-op by policy.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }
}

//! Game configuration.
//!
//! A `GameConfig` fixes the symbol set (and therefore the deck size), the
//! mismatch display delay, and the board's column count. The engine never
//! hardcodes any of these; the defaults reproduce the classic five-pair
//! film board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Symbol;

/// Default symbol set: five pairs.
const DEFAULT_SYMBOLS: [&str; 5] = [
    "a-space-odyssey",
    "a-clockwork-orange",
    "barry-lyndon",
    "dr-strangelove",
    "the-shining",
];

/// How long a mismatched pair stays visible before flipping back.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Default board width in tiles.
pub const DEFAULT_COLUMNS: usize = 5;

/// A tile's position in the board grid.
///
/// Layout hint carried by `CardRendered` so the UI shell does not have to
/// re-derive row/column from event order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub col: u32,
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct match symbols; the deck holds two cards per symbol.
    pub symbols: Vec<Symbol>,

    /// Mismatch display delay before both cards flip back down.
    pub mismatch_delay: Duration,

    /// Board width in tiles.
    pub columns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS.iter().map(|s| Symbol::new(*s)).collect())
    }
}

impl GameConfig {
    /// Create a configuration with the given symbols and default delay
    /// and layout.
    ///
    /// Panics if `symbols` is empty or contains duplicates: a duplicated
    /// symbol would break the every-symbol-appears-exactly-twice deck
    /// invariant.
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        assert!(!symbols.is_empty(), "Config needs at least one symbol");
        for (i, symbol) in symbols.iter().enumerate() {
            assert!(
                !symbols[..i].contains(symbol),
                "Duplicate symbol in config: {symbol}"
            );
        }

        Self {
            symbols,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the board width in tiles.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        assert!(columns > 0, "Board needs at least one column");
        self.columns = columns;
        self
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Grid position of the tile at the given board index.
    #[must_use]
    pub fn position_of(&self, index: usize) -> GridPosition {
        GridPosition {
            row: (index / self.columns) as u32,
            col: (index % self.columns) as u32,
        }
    }
}

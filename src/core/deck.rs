//! Deck construction and lookup.
//!
//! A deck is an ordered sequence of cards whose order is the board order:
//! index 0 is the first tile, index 1 the second, and so on. Ids are
//! assigned before the shuffle and travel with their cards, so a shuffle
//! changes positions but never identities.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Symbol};
use super::rng::GameRng;

/// An ordered deck of paired cards.
///
/// Invariant: every symbol appears on exactly two cards, so
/// `len() == 2 * pairs()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build an unshuffled deck with two cards per symbol.
    ///
    /// Ids run 0..2n in build order. Symbols must be distinct; duplicated
    /// input symbols would silently produce four-of-a-kind groups and break
    /// the pairing invariant.
    #[must_use]
    pub fn build(symbols: &[Symbol]) -> Self {
        assert!(!symbols.is_empty(), "Deck needs at least one symbol");
        assert!(
            symbols.len() * 2 <= u16::MAX as usize,
            "Too many symbols for u16 card ids"
        );

        let mut cards = Vec::with_capacity(symbols.len() * 2);
        for symbol in symbols {
            for _ in 0..2 {
                let id = CardId::new(cards.len() as u16);
                cards.push(Card::new(id, symbol.clone()));
            }
        }

        let deck = Self { cards };
        debug_assert!(deck.is_paired());
        deck
    }

    /// Shuffle the board order in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Look up a card by id, mutably.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// The symbol of a card, if the id exists.
    #[must_use]
    pub fn symbol_of(&self, id: CardId) -> Option<&Symbol> {
        self.get(id).map(|c| &c.symbol)
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Check the pairing invariant: every symbol appears exactly twice.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(&card.symbol).or_insert(0) += 1;
        }
        counts.values().all(|&n| n == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(|n| Symbol::new(*n)).collect()
    }

    #[test]
    fn test_build_creates_pairs() {
        let deck = Deck::build(&symbols(&["a", "b", "c"]));

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pairs(), 3);
        assert!(deck.is_paired());
    }

    #[test]
    fn test_build_assigns_sequential_ids() {
        let deck = Deck::build(&symbols(&["a", "b"]));

        let ids: Vec<_> = deck.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_build_all_face_down() {
        let deck = Deck::build(&symbols(&["a", "b"]));
        assert!(deck.iter().all(|c| !c.face_up && !c.matched));
    }

    #[test]
    #[should_panic(expected = "at least one symbol")]
    fn test_build_empty_panics() {
        Deck::build(&[]);
    }

    #[test]
    fn test_lookup_by_id() {
        let deck = Deck::build(&symbols(&["a", "b"]));

        assert_eq!(deck.symbol_of(CardId::new(0)), Some(&Symbol::new("a")));
        assert_eq!(deck.symbol_of(CardId::new(2)), Some(&Symbol::new("b")));
        assert_eq!(deck.symbol_of(CardId::new(9)), None);
        assert!(deck.get(CardId::new(9)).is_none());
    }

    #[test]
    fn test_shuffle_preserves_ids_and_pairing() {
        let mut deck = Deck::build(&symbols(&["a", "b", "c", "d", "e"]));
        let mut rng = GameRng::new(42);

        deck.shuffle(&mut rng);

        assert!(deck.is_paired());
        let mut ids: Vec<_> = deck.iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());

        // Ids still resolve to their original symbols
        assert_eq!(deck.symbol_of(CardId::new(0)), Some(&Symbol::new("a")));
        assert_eq!(deck.symbol_of(CardId::new(9)), Some(&Symbol::new("e")));
    }

    #[test]
    fn test_shuffle_deterministic_with_seed() {
        let mut deck1 = Deck::build(&symbols(&["a", "b", "c", "d"]));
        let mut deck2 = deck1.clone();

        deck1.shuffle(&mut GameRng::new(7));
        deck2.shuffle(&mut GameRng::new(7));

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_is_paired_detects_violation() {
        let mut deck = Deck::build(&symbols(&["a", "b"]));
        deck.get_mut(CardId::new(0)).unwrap().symbol = Symbol::new("b");

        assert!(!deck.is_paired());
    }
}

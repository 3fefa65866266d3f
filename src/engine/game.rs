//! The game state machine.
//!
//! Phases: `Idle -> Playing -> Resolving -> Playing ... -> Won`.
//!
//! A `GameEngine` instance owns one board. It reacts to commands, emits
//! render events through its sink, asks its scheduler for the mismatch
//! delay, and consults its store for the best score when a game is won.
//! Nothing here is global; tests run as many independent engines as they
//! like.

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::command::Command;
use super::config::GameConfig;
use super::events::{RenderEvent, RenderSink};
use super::timer::{Scheduler, TimerToken};
use crate::core::{Card, CardId, Deck, GameRng};
use crate::storage::BestScoreStore;

/// Engine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// No session yet. Waiting for `Start`.
    Idle,
    /// Accepting card selections.
    Playing,
    /// A mismatched pair is on display; waiting for the timer.
    Resolving,
    /// All pairs found.
    Won,
}

/// The memory game engine.
///
/// Generic over its three capabilities so tests can plug in recording
/// implementations and shells can plug in real ones.
pub struct GameEngine<S, R, T>
where
    S: BestScoreStore,
    R: RenderSink,
    T: Scheduler,
{
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    phase: Phase,
    /// At most two face-up, unmatched cards awaiting comparison.
    selection: SmallVec<[CardId; 2]>,
    score: u32,
    pairs_found: u32,
    /// Session counter; stamped into timer tokens so stale callbacks from
    /// a previous session are ignored.
    generation: u64,
    store: S,
    sink: R,
    scheduler: T,
}

impl<S, R, T> GameEngine<S, R, T>
where
    S: BestScoreStore,
    R: RenderSink,
    T: Scheduler,
{
    /// Create an engine with an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig, store: S, sink: R, scheduler: T) -> Self {
        Self::with_rng(config, GameRng::from_entropy(), store, sink, scheduler)
    }

    /// Create an engine with a fixed seed, for reproducible boards.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64, store: S, sink: R, scheduler: T) -> Self {
        Self::with_rng(config, GameRng::new(seed), store, sink, scheduler)
    }

    fn with_rng(config: GameConfig, rng: GameRng, store: S, sink: R, scheduler: T) -> Self {
        let deck = Deck::build(&config.symbols);
        Self {
            config,
            rng,
            deck,
            phase: Phase::Idle,
            selection: SmallVec::new(),
            score: 0,
            pairs_found: 0,
            generation: 0,
            store,
            sink,
            scheduler,
        }
    }

    // === Commands ===

    /// Dispatch an inbound command.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::CardClicked(id) => self.select_card(id),
            Command::Reset => self.reset(),
        }
    }

    /// Begin a session. No-op unless idle.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            trace!(phase = ?self.phase, "start ignored outside idle");
            return;
        }
        self.begin_session();
    }

    /// Tear down the current session and start a fresh one.
    ///
    /// Valid from any phase. Bumps the generation first, so a mismatch
    /// timer still pending from the old session fires as a stale no-op.
    pub fn reset(&mut self) {
        debug!(phase = ?self.phase, "reset");
        self.begin_session();
    }

    /// Select the card with the given id.
    ///
    /// Silently ignored when not playing, when the id is unknown, when the
    /// card is already face-up or matched, or when two cards are already
    /// awaiting resolution. A valid selection flips the card, scores one
    /// point, and on the second card of a pair triggers comparison.
    pub fn select_card(&mut self, id: CardId) {
        if self.phase != Phase::Playing {
            trace!(%id, phase = ?self.phase, "selection ignored outside playing");
            return;
        }
        // Guard against a third click racing the mismatch timer.
        if self.selection.len() >= 2 {
            trace!(%id, "selection ignored, pair pending");
            return;
        }

        let symbol = {
            let Some(card) = self.deck.get_mut(id) else {
                trace!(%id, "selection ignored, unknown id");
                return;
            };
            if !card.is_selectable() {
                trace!(%id, "selection ignored, card face-up or matched");
                return;
            }
            card.face_up = true;
            card.symbol.clone()
        };

        self.score += 1;
        self.selection.push(id);
        self.sink.emit(RenderEvent::CardFlipped { id, symbol });
        self.sink.emit(RenderEvent::ScoreChanged(self.score));

        if self.selection.len() == 2 {
            self.resolve_selection();
        }
    }

    /// Deliver a timer callback.
    ///
    /// Ignored unless the token's generation matches the current session
    /// and a mismatch is actually pending.
    pub fn timer_fired(&mut self, token: TimerToken) {
        if token.generation() != self.generation {
            debug!(
                token_generation = token.generation(),
                current_generation = self.generation,
                "stale timer ignored"
            );
            return;
        }
        if self.phase != Phase::Resolving {
            trace!(phase = ?self.phase, "timer ignored outside resolving");
            return;
        }

        let pending = std::mem::take(&mut self.selection);
        for id in pending {
            if let Some(card) = self.deck.get_mut(id) {
                card.face_up = false;
            }
            self.sink.emit(RenderEvent::CardHidden { id });
        }
        self.phase = Phase::Playing;
    }

    // === Internals ===

    /// Shared start/reset path: new generation, fresh shuffled deck,
    /// zeroed counters, full re-render.
    fn begin_session(&mut self) {
        self.generation += 1;
        self.deck = Deck::build(&self.config.symbols);
        self.deck.shuffle(&mut self.rng);
        self.selection.clear();
        self.score = 0;
        self.pairs_found = 0;
        self.phase = Phase::Playing;
        debug!(
            generation = self.generation,
            cards = self.deck.len(),
            "session started"
        );

        for (index, card) in self.deck.iter().enumerate() {
            self.sink.emit(RenderEvent::CardRendered {
                id: card.id,
                position: self.config.position_of(index),
            });
        }
        self.sink.emit(RenderEvent::ScoreChanged(self.score));
    }

    /// Compare the two selected cards.
    fn resolve_selection(&mut self) {
        debug_assert_eq!(self.selection.len(), 2);
        let first = self.selection[0];
        let second = self.selection[1];

        let is_match = match (self.deck.symbol_of(first), self.deck.symbol_of(second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        if is_match {
            // Matches resolve synchronously; the cards stay face-up.
            for id in [first, second] {
                if let Some(card) = self.deck.get_mut(id) {
                    card.matched = true;
                }
            }
            self.pairs_found += 1;
            self.selection.clear();
            debug!(%first, %second, pairs_found = self.pairs_found, "pair matched");

            if self.pairs_found == self.deck.pairs() {
                self.phase = Phase::Won;
                self.finish();
            }
        } else {
            self.phase = Phase::Resolving;
            let token = TimerToken::new(self.generation);
            debug!(%first, %second, "mismatch, scheduling flip-back");
            self.scheduler.schedule(self.config.mismatch_delay, token);
        }
    }

    /// Win sequence: announce, clear the board, update the best score.
    fn finish(&mut self) {
        debug!(score = self.score, "game won");
        self.sink.emit(RenderEvent::GameWon(self.score));
        for card in self.deck.iter() {
            self.sink.emit(RenderEvent::CardHidden { id: card.id });
        }

        // A corrupt or unreadable store must not stop the game from
        // finishing; treat it as "no best score recorded".
        let best = match self.store.best_score() {
            Ok(best) => best,
            Err(error) => {
                warn!(%error, "best score read failed, treating as absent");
                None
            }
        };

        // Lower is better: fewer flips to finish.
        let improved = best.map_or(true, |b| self.score < b);
        if improved {
            match self.store.set_best_score(self.score) {
                Ok(()) => self.sink.emit(RenderEvent::BestScoreChanged(self.score)),
                Err(error) => warn!(%error, "best score write failed"),
            }
        }
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current score: one point per valid flip.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Pairs found so far this session.
    #[must_use]
    pub fn pairs_found(&self) -> u32 {
        self.pairs_found
    }

    /// Total pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.deck.pairs()
    }

    /// Current session generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The ids currently selected and awaiting comparison.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    /// Iterate over cards in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter()
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed driving the shuffle.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The render sink.
    #[must_use]
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// The render sink, mutably (tests drain recorded events through this).
    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// The best-score store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// The scheduler, mutably (tests pop pending tasks through this).
    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

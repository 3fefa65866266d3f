//! Render events and the sink capability.
//!
//! The engine narrates every observable change as a [`RenderEvent`] pushed
//! into a [`RenderSink`]. A presentation layer turns those into DOM
//! mutations, terminal drawing, whatever; the engine neither knows nor
//! cares. Invalid input produces no events at all.

use serde::{Deserialize, Serialize};

use super::config::GridPosition;
use crate::core::{CardId, Symbol};

/// An observable change the UI should render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEvent {
    /// A face-down tile exists at this grid position. Emitted once per
    /// card, in board order, at session start.
    CardRendered { id: CardId, position: GridPosition },

    /// A card flipped face-up, revealing its symbol.
    CardFlipped { id: CardId, symbol: Symbol },

    /// A card flipped face-down (mismatch resolution) or left play
    /// (board cleared on win).
    CardHidden { id: CardId },

    /// The score changed; carries the new value.
    ScoreChanged(u32),

    /// The last pair was found; carries the final score.
    GameWon(u32),

    /// A new best score was persisted; carries the new value.
    BestScoreChanged(u32),
}

/// Capability consumed by the presentation layer.
pub trait RenderSink {
    /// Receive one render event.
    fn emit(&mut self, event: RenderEvent);
}

/// A sink that records every event, for tests and replay capture.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<RenderEvent>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Remove and return all recorded events.
    pub fn drain(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Has nothing been recorded?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl RenderSink for RecordingSink {
    fn emit(&mut self, event: RenderEvent) {
        self.events.push(event);
    }
}

/// A sink that discards everything. For headless use of the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn emit(&mut self, _event: RenderEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_records_in_order() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.emit(RenderEvent::ScoreChanged(1));
        sink.emit(RenderEvent::CardHidden { id: CardId::new(0) });

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[0], RenderEvent::ScoreChanged(1));
        assert_eq!(
            sink.events()[1],
            RenderEvent::CardHidden { id: CardId::new(0) }
        );
    }

    #[test]
    fn test_recording_sink_drain() {
        let mut sink = RecordingSink::new();
        sink.emit(RenderEvent::GameWon(4));

        let drained = sink.drain();
        assert_eq!(drained, vec![RenderEvent::GameWon(4)]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_null_sink_discards() {
        let mut sink = NullSink;
        sink.emit(RenderEvent::ScoreChanged(1)); // no panic, nothing kept
    }

    #[test]
    fn test_serialization() {
        let event = RenderEvent::CardFlipped {
            id: CardId::new(2),
            symbol: Symbol::new("barry-lyndon"),
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: RenderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}

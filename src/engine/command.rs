//! Inbound command surface.
//!
//! The UI shell translates raw input (button presses, tile clicks) into
//! commands and feeds them to [`GameEngine::handle`]. Commands the current
//! phase does not accept are silently ignored.
//!
//! [`GameEngine::handle`]: crate::engine::GameEngine::handle

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// A command from the UI shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Begin a session. Only meaningful from the idle phase.
    Start,
    /// The player clicked the tile with this id.
    CardClicked(CardId),
    /// Tear the session down and start a fresh one.
    Reset,
}

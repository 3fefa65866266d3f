//! The timer capability.
//!
//! The engine never sleeps. When a mismatch needs to stay visible for a
//! moment, the engine asks the shell's [`Scheduler`] to call back after a
//! delay, handing it a [`TimerToken`]. The shell owns real time: it waits
//! (via `setTimeout`, a tokio sleep, an event loop timer) and then passes
//! the token back to `GameEngine::timer_fired`.
//!
//! Tokens are generation-stamped. Every new session bumps the engine's
//! generation, so a timer scheduled before a reset comes back stale and is
//! ignored instead of flipping cards that now belong to a fresh board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Opaque handle for one scheduled callback.
///
/// Created by the engine, carried through the shell's timer machinery, and
/// handed back unchanged. The generation inside it decides whether the
/// callback is still relevant when it finally fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    generation: u64,
}

impl TimerToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// The session generation this token was issued in.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Capability for scheduling a delayed callback.
pub trait Scheduler {
    /// Arrange for `token` to be passed back to the engine after `delay`.
    fn schedule(&mut self, delay: Duration, token: TimerToken);
}

/// A task recorded by [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Requested delay.
    pub delay: Duration,
    /// Token to hand back when the delay elapses.
    pub token: TimerToken,
}

/// A scheduler that records tasks instead of waiting.
///
/// Tests (and synchronous shells) pop the recorded tasks and fire them at
/// whatever moment they choose.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    pending: Vec<ScheduledTask>,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks scheduled and not yet taken.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTask] {
        &self.pending
    }

    /// Remove and return all pending tasks, oldest first.
    pub fn take_pending(&mut self) -> Vec<ScheduledTask> {
        std::mem::take(&mut self.pending)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.pending.push(ScheduledTask { delay, token });
    }
}

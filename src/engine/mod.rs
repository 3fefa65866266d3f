//! The game engine: configuration, inbound commands, render events,
//! the timer capability, and the state machine itself.

pub mod command;
pub mod config;
pub mod events;
pub mod game;
pub mod timer;

pub use command::Command;
pub use config::{GameConfig, GridPosition};
pub use events::{NullSink, RecordingSink, RenderEvent, RenderSink};
pub use game::{GameEngine, Phase};
pub use timer::{ManualScheduler, ScheduledTask, Scheduler, TimerToken};

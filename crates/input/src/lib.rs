//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and provides
//! the bounded queue the frame loop drains once per tick. Independent of
//! any rendering code.

pub mod map;
pub mod queue;

pub use tui_raycast_types as types;

pub use map::{map_key, should_quit};
pub use queue::{CommandQueue, QUEUE_CAPACITY};

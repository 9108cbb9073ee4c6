//! Single-writer/single-reader command queue.
//!
//! The frame loop pushes whatever key events are pending without blocking
//! the render step, then drains the whole queue once per tick so commands
//! apply atomically and in arrival order.

use arrayvec::ArrayVec;

use crate::types::Command;

/// More commands than any human produces between two ticks; overflow is
/// dropped rather than blocking.
pub const QUEUE_CAPACITY: usize = 64;

/// Bounded FIFO of movement commands collected between ticks.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: ArrayVec<Command, QUEUE_CAPACITY>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a command. Returns false when the queue is full and the
    /// command was dropped.
    pub fn push(&mut self, command: Command) -> bool {
        self.pending.try_push(command).is_ok()
    }

    /// Take everything queued so far, in arrival order, leaving the queue
    /// empty for the next tick.
    pub fn drain(&mut self) -> ArrayVec<Command, QUEUE_CAPACITY> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

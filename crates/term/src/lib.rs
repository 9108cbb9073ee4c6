//! Terminal rendering layer.
//!
//! Renders a [`tui_raycast_core::Scene`] into a plain character
//! framebuffer and flushes it to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: `SceneView` does no I/O and is exercised directly
//!   in tests
//! - Hide the output surface behind [`fb::FrameSink`] so a test harness can
//!   capture frames instead of a terminal

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use fb::{FrameBuffer, FrameSink};
pub use renderer::TerminalRenderer;
pub use view::{floor_shade, wall_band, wall_shade, SceneView, MINIMAP_COL, MINIMAP_ROW};

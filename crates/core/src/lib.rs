//! Core rendering logic - pure, deterministic, and testable.
//!
//! This crate contains the map, player movement, and ray-casting rules.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same scene and commands produce the same rays
//! - **Testable**: every rule has colocated unit tests
//! - **Portable**: runs in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`map`]: immutable tile grid with wall/bounds queries
//! - [`player`]: position/orientation with speculative collision moves
//! - [`raycast`]: fixed-step ray marching and corner-seam detection
//! - [`scene`]: owning struct the frame loop drives each tick

pub mod map;
pub mod player;
pub mod raycast;
pub mod scene;

pub use tui_raycast_types as types;

// Re-export commonly used types for convenience
pub use map::{Map, Tile};
pub use player::Player;
pub use raycast::{cast_ray, ray_angle, RaySample};
pub use scene::Scene;

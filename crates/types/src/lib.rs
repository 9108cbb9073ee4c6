//! Core types shared across the application.
//! This crate contains pure data types with no external dependencies.

use std::f32::consts::FRAC_PI_4;

/// Screen dimensions (character cells).
pub const SCREEN_WIDTH: u16 = 120;
pub const SCREEN_HEIGHT: u16 = 40;

/// Total angular width swept across all screen columns (radians).
pub const FOV: f32 = FRAC_PI_4;

/// Maximum ray range in map-tile units. Rays are clamped here.
pub const MAX_DEPTH: f32 = 16.0;

/// Fixed ray-march increment (map-tile units). Smaller is more accurate
/// and proportionally more expensive.
pub const STEP_SIZE: f32 = 0.1;

/// Translation speed in tiles per millisecond.
pub const MOVE_SPEED: f32 = 0.05;

/// Rotation speed in radians per millisecond.
pub const TURN_SPEED: f32 = 0.05;

/// A ray within this angle (radians) of a wall-tile corner renders as a
/// mortar seam.
pub const BOUNDARY_RAD: f32 = 0.01;

/// Rendering and movement configuration.
///
/// All values are fixed at startup; tests construct coarser configs
/// (larger `step_size`, smaller screens) to keep assertions cheap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    pub fov: f32,
    pub max_depth: f32,
    pub step_size: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
    pub boundary_rad: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fov: FOV,
            max_depth: MAX_DEPTH,
            step_size: STEP_SIZE,
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            boundary_rad: BOUNDARY_RAD,
        }
    }
}

/// Discrete movement commands applied once per tick, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
}

impl Command {
    /// Parse command from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "turnleft" => Some(Command::TurnLeft),
            "turnright" => Some(Command::TurnRight),
            "moveforward" => Some(Command::MoveForward),
            "movebackward" => Some(Command::MoveBackward),
            "strafeleft" => Some(Command::StrafeLeft),
            "straferight" => Some(Command::StrafeRight),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::TurnLeft => "turnLeft",
            Command::TurnRight => "turnRight",
            Command::MoveForward => "moveForward",
            Command::MoveBackward => "moveBackward",
            Command::StrafeLeft => "strafeLeft",
            Command::StrafeRight => "strafeRight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_round_trips_through_strings() {
        let all = [
            Command::TurnLeft,
            Command::TurnRight,
            Command::MoveForward,
            Command::MoveBackward,
            Command::StrafeLeft,
            Command::StrafeRight,
        ];
        for cmd in all {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("jump"), None);
    }

    #[test]
    fn test_default_config_uses_reference_constants() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.screen_width, 120);
        assert_eq!(cfg.screen_height, 40);
        assert_eq!(cfg.max_depth, 16.0);
        assert!(cfg.step_size > 0.0);
        assert!(cfg.boundary_rad > 0.0);
    }
}

//! Scene: the single owner of all per-session state.
//!
//! The frame loop holds one `Scene` and drives it once per tick; there is
//! no global state anywhere in the crate.

use tui_raycast_types::{Command, RenderConfig};

use crate::map::Map;
use crate::player::Player;
use crate::raycast::{cast_ray, ray_angle, RaySample};

/// Map, player, and render configuration for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub map: Map,
    pub player: Player,
    pub config: RenderConfig,
}

impl Scene {
    pub fn new(map: Map, player: Player, config: RenderConfig) -> Self {
        Self {
            map,
            player,
            config,
        }
    }

    /// Reference setup: the built-in arena, player at (8, 8) facing angle 0.
    pub fn with_defaults() -> Self {
        Self::new(
            Map::default_map(),
            Player::new(8.0, 8.0, 0.0),
            RenderConfig::default(),
        )
    }

    /// Apply drained movement commands in arrival order, once per tick.
    pub fn apply_commands<I>(&mut self, commands: I, elapsed_ms: f32)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.player
                .apply(command, elapsed_ms, &self.map, &self.config);
        }
    }

    /// Cast the ray for one screen column from the player's viewpoint.
    pub fn cast_column(&self, column: u16) -> RaySample {
        let angle = ray_angle(&self.config, self.player.angle, column);
        cast_ray(&self.map, &self.config, self.player.x, self.player.y, angle)
    }

    /// Instantaneous frames per second. Defined as 0 when the clock has
    /// not advanced (first tick or stalled clock) so the status line never
    /// divides by zero.
    pub fn fps(elapsed_ms: f32) -> f32 {
        if elapsed_ms <= 0.0 {
            0.0
        } else {
            1000.0 / elapsed_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_apply_in_arrival_order() {
        let mut scene = Scene::with_defaults();
        // Turn then move: the move must use the already-updated angle.
        scene.apply_commands([Command::TurnRight, Command::MoveForward], 10.0);

        let mut expected = Scene::with_defaults();
        expected.apply_commands([Command::TurnRight], 10.0);
        expected.apply_commands([Command::MoveForward], 10.0);

        assert_eq!(scene.player, expected.player);
    }

    #[test]
    fn test_blocked_forward_against_border_is_noop() {
        let mut scene = Scene::with_defaults();
        scene.player = Player::new(8.0, 14.5, 0.0);
        let before = scene.player;
        scene.apply_commands([Command::MoveForward], 200.0);
        assert_eq!(scene.player.x, before.x);
        assert_eq!(scene.player.y, before.y);
    }

    #[test]
    fn test_center_column_from_reference_position() {
        let scene = Scene::with_defaults();
        let sample = scene.cast_column(scene.config.screen_width / 2);
        assert!(sample.hit_wall);
        assert!(sample.distance > 0.0);
        assert!(sample.distance < scene.config.max_depth);
    }

    #[test]
    fn test_fps_is_zero_on_stalled_clock() {
        assert_eq!(Scene::fps(0.0), 0.0);
        assert_eq!(Scene::fps(-1.0), 0.0);
        assert!((Scene::fps(16.0) - 62.5).abs() < 1e-4);
    }
}

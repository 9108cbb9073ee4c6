//! Player state and speculative movement against the map.

use tui_raycast_types::{Command, RenderConfig};

use crate::map::Map;

/// Continuous position in tile units plus facing angle in radians.
///
/// `x` runs along the column axis and `y` along the row axis; the facing
/// direction is `(sin angle, cos angle)`, so angle 0 looks toward
/// increasing rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    /// Truncated tile coordinates, used for collision and the mini-map
    /// marker.
    pub fn tile(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Apply one movement command scaled by elapsed time.
    ///
    /// Turns always succeed. Translations are speculative: the delta is
    /// added, the destination tile is checked, and on a wall the exact
    /// delta is subtracted again. A blocked move is fully rejected, never
    /// clipped or slid along the wall.
    pub fn apply(&mut self, command: Command, elapsed_ms: f32, map: &Map, config: &RenderConfig) {
        let turn = config.turn_speed * elapsed_ms;
        let step = config.move_speed * elapsed_ms;
        let (sin_a, cos_a) = (self.angle.sin(), self.angle.cos());

        match command {
            Command::TurnLeft => self.angle -= turn,
            Command::TurnRight => self.angle += turn,
            Command::MoveForward => self.translate(sin_a * step, cos_a * step, map),
            Command::MoveBackward => self.translate(-sin_a * step, -cos_a * step, map),
            Command::StrafeLeft => self.translate(-cos_a * step, sin_a * step, map),
            Command::StrafeRight => self.translate(cos_a * step, -sin_a * step, map),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32, map: &Map) {
        self.x += dx;
        self.y += dy;
        let (col, row) = self.tile();
        if map.is_wall(col, row) {
            // Revert exactly the applied delta, leaving the player where
            // they stood (adjacent to the wall, never inside it).
            self.x -= dx;
            self.y -= dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    #[test]
    fn test_forward_move_advances_along_facing() {
        let map = Map::default_map();
        let mut p = Player::new(8.0, 8.0, 0.0);
        p.apply(Command::MoveForward, 10.0, &map, &config());
        // Facing (sin 0, cos 0) = (0, 1): only y moves.
        assert_eq!(p.x, 8.0);
        assert!(p.y > 8.0);
    }

    #[test]
    fn test_move_into_wall_is_a_position_noop() {
        let map = Map::default_map();
        // One tile above the bottom border, facing straight at it.
        let mut p = Player::new(8.0, 14.5, 0.0);
        let before = p;
        p.apply(Command::MoveForward, 100.0, &map, &config());
        assert_eq!(p.x, before.x);
        assert_eq!(p.y, before.y);
    }

    #[test]
    fn test_turns_never_blocked_even_against_walls() {
        let map = Map::default_map();
        let mut p = Player::new(1.1, 1.1, 0.0);
        p.apply(Command::TurnLeft, 10.0, &map, &config());
        assert!(p.angle < 0.0);
        p.apply(Command::TurnRight, 20.0, &map, &config());
        assert!(p.angle > 0.0);
    }

    #[test]
    fn test_strafe_directions_are_opposite() {
        let map = Map::default_map();
        let origin = Player::new(8.0, 8.0, 0.3);
        let mut left = origin;
        let mut right = origin;
        left.apply(Command::StrafeLeft, 5.0, &map, &config());
        right.apply(Command::StrafeRight, 5.0, &map, &config());
        assert!((left.x - origin.x + (right.x - origin.x)).abs() < 1e-5);
        assert!((left.y - origin.y + (right.y - origin.y)).abs() < 1e-5);
        // Strafing is perpendicular to facing: angle unchanged.
        assert_eq!(left.angle, origin.angle);
    }

    #[test]
    fn test_backward_is_forward_negated() {
        let map = Map::default_map();
        let origin = Player::new(8.0, 8.0, 1.0);
        let mut fwd = origin;
        let mut back = origin;
        fwd.apply(Command::MoveForward, 5.0, &map, &config());
        back.apply(Command::MoveBackward, 5.0, &map, &config());
        assert!((fwd.x - origin.x + (back.x - origin.x)).abs() < 1e-5);
        assert!((fwd.y - origin.y + (back.y - origin.y)).abs() < 1e-5);
    }
}

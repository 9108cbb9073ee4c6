//! Fixed-step ray marching with corner ("mortar line") detection.

use tui_raycast_types::RenderConfig;

use crate::map::Map;

/// Result of casting one ray: how far the nearest wall is, whether a wall
/// was actually hit within range, and whether the ray grazes a tile corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySample {
    /// Distance to the hit, clamped to `[0, max_depth]`.
    pub distance: f32,
    /// False when the ray ran out of range without touching a wall.
    pub hit_wall: bool,
    /// True when the ray passes within `boundary_rad` of a corner of the
    /// hit tile; rendered as a blank seam between wall tiles.
    pub boundary: bool,
}

/// Angle of the ray for a given screen column: a linear sweep covering
/// `[player_angle - fov/2, player_angle + fov/2)` left to right.
pub fn ray_angle(config: &RenderConfig, player_angle: f32, column: u16) -> f32 {
    player_angle - config.fov / 2.0 + (column as f32 / config.screen_width as f32) * config.fov
}

/// March a ray from `(origin_x, origin_y)` along `angle` until it hits a
/// wall or runs out of range.
///
/// The march advances in fixed `step_size` increments. A ray passing
/// exactly along a gridline can flicker between the two adjacent cells at
/// coarse steps; that is inherent to fixed-step marching and tuned via
/// `step_size`, not special-cased.
pub fn cast_ray(
    map: &Map,
    config: &RenderConfig,
    origin_x: f32,
    origin_y: f32,
    angle: f32,
) -> RaySample {
    let eye_x = angle.sin();
    let eye_y = angle.cos();

    let mut distance = 0.0f32;
    let mut hit_wall = false;
    let mut boundary = false;

    while !hit_wall && distance < config.max_depth {
        distance += config.step_size;

        let test_col = (origin_x + eye_x * distance).floor() as i32;
        let test_row = (origin_y + eye_y * distance).floor() as i32;

        if !map.in_bounds(test_col, test_row) {
            // Hit the void: treat as a wall at maximum range.
            hit_wall = true;
            distance = config.max_depth;
        } else if map.is_wall(test_col, test_row) {
            hit_wall = true;
            boundary = grazes_corner(config, origin_x, origin_y, eye_x, eye_y, test_col, test_row);
        }
    }

    RaySample {
        distance: distance.min(config.max_depth),
        hit_wall,
        boundary,
    }
}

/// Check the hit tile's four integer corners: if the ray direction is
/// within `boundary_rad` of the direction to any of the nearest three
/// corners, the ray grazes a tile edge. Two corners bound the visible
/// edge; the third guards against near-degenerate distance ties.
fn grazes_corner(
    config: &RenderConfig,
    origin_x: f32,
    origin_y: f32,
    eye_x: f32,
    eye_y: f32,
    tile_col: i32,
    tile_row: i32,
) -> bool {
    let mut corners = [(0.0f32, 0.0f32); 4];
    let mut n = 0;
    for dc in 0..2 {
        for dr in 0..2 {
            let vx = (tile_col + dc) as f32 - origin_x;
            let vy = (tile_row + dr) as f32 - origin_y;
            let d = (vx * vx + vy * vy).sqrt();
            // Clamped: rounding can push a perfectly aligned dot past 1,
            // and acos of that is NaN.
            let dot = ((eye_x * vx + eye_y * vy) / d).clamp(-1.0, 1.0);
            corners[n] = (d, dot);
            n += 1;
        }
    }
    corners.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    corners
        .iter()
        .take(3)
        .any(|&(_, dot)| dot.acos() < config.boundary_rad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    #[test]
    fn test_ray_angles_sweep_fov_monotonically() {
        let cfg = config();
        let a = 0.7f32;
        let first = ray_angle(&cfg, a, 0);
        assert!((first - (a - cfg.fov / 2.0)).abs() < 1e-6);

        let mut prev = first;
        for x in 1..cfg.screen_width {
            let next = ray_angle(&cfg, a, x);
            assert!(next > prev, "column {x} did not advance the sweep");
            prev = next;
        }
        // Half-open span: the last column stays strictly inside fov/2.
        assert!(prev < a + cfg.fov / 2.0);
    }

    #[test]
    fn test_straight_ray_distance_within_one_step() {
        let map = Map::default_map();
        let cfg = config();
        // Facing +y from (3.0, 8.5): column 3 is open all the way down, so
        // the bottom border at row 15 is 6.5 tiles away.
        let sample = cast_ray(&map, &cfg, 3.0, 8.5, 0.0);
        assert!(sample.hit_wall);
        assert!(
            (sample.distance - 6.5).abs() <= cfg.step_size + 1e-4,
            "distance {} not within one step of 6.5",
            sample.distance
        );
    }

    #[test]
    fn test_ray_without_wall_clamps_to_max_depth() {
        let map = Map::default_map();
        let mut cfg = config();
        cfg.max_depth = 4.0;
        // Column 3 facing +y: nearest wall is 7 tiles away, out of range.
        let sample = cast_ray(&map, &cfg, 3.0, 8.0, 0.0);
        assert!(!sample.hit_wall);
        assert_eq!(sample.distance, cfg.max_depth);
        assert!(!sample.boundary);
    }

    #[test]
    fn test_ray_from_reference_center_hits_interior_wall() {
        let map = Map::default_map();
        let cfg = config();
        let center = cfg.screen_width / 2;
        let sample = cast_ray(&map, &cfg, 8.0, 8.0, ray_angle(&cfg, 0.0, center));
        assert!(sample.hit_wall);
        assert!(sample.distance > 0.0);
        assert!(sample.distance < cfg.max_depth);
    }

    #[test]
    fn test_corner_aimed_ray_sets_boundary() {
        // Wall row across row 5 of an open box; aim exactly at the corner
        // (3.0, 5.0) from (2.5, 2.5).
        let map = Map::parse(
            "########\n\
             #......#\n\
             #......#\n\
             #......#\n\
             #......#\n\
             ########\n\
             #......#\n\
             ########",
        )
        .unwrap();
        let cfg = config();
        let angle = (3.0f32 - 2.5).atan2(5.0 - 2.5);
        let sample = cast_ray(&map, &cfg, 2.5, 2.5, angle);
        assert!(sample.hit_wall);
        assert!(sample.boundary, "corner-aligned ray should graze");
    }

    #[test]
    fn test_face_centered_ray_has_no_boundary() {
        let map = Map::default_map();
        let cfg = config();
        // Straight at the middle of the interior wall face below.
        let sample = cast_ray(&map, &cfg, 8.5, 8.5, 0.0);
        assert!(sample.hit_wall);
        assert!(!sample.boundary);
    }
}

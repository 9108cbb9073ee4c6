//! SceneView: maps a `core::Scene` into a character framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_raycast_core::{RaySample, Scene};

use crate::fb::FrameBuffer;

/// Mini-map overlay position: row 0 is the status line, the map starts one
/// row below it, left-aligned.
pub const MINIMAP_COL: u16 = 0;
pub const MINIMAP_ROW: u16 = 1;

/// Pure per-frame compositor: ray-casts every column, shades walls, floor
/// and ceiling, then overlays the status line and mini-map.
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneView;

impl SceneView {
    /// Render one frame into a fresh framebuffer.
    pub fn render(&self, scene: &Scene, elapsed_ms: f32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(scene.config.screen_width, scene.config.screen_height);
        self.render_into(scene, elapsed_ms, &mut fb);
        fb
    }

    /// Render one frame, reusing the caller's framebuffer allocation.
    ///
    /// Every cell is written each tick; nothing from the previous frame
    /// survives.
    pub fn render_into(&self, scene: &Scene, elapsed_ms: f32, fb: &mut FrameBuffer) {
        let w = scene.config.screen_width;
        let h = scene.config.screen_height;
        fb.resize(w, h);

        for x in 0..w {
            let sample = scene.cast_column(x);
            self.shade_column(scene, &sample, x, fb);
        }

        self.overlay_status(scene, elapsed_ms, fb);
        self.overlay_minimap(scene, fb);
    }

    /// Fill one column top to bottom: sky above the wall band, shaded wall
    /// glyphs inside it, gradient floor below.
    fn shade_column(&self, scene: &Scene, sample: &RaySample, x: u16, fb: &mut FrameBuffer) {
        let h = scene.config.screen_height;
        let (ceiling, floor_row) = wall_band(h, sample.distance);

        for y in 0..h as i32 {
            let ch = if y < ceiling {
                ' '
            } else if y <= floor_row {
                wall_shade(sample, scene.config.max_depth)
            } else {
                floor_shade(y, h)
            };
            fb.set(x, y as u16, ch);
        }
    }

    /// Status line in the leading cells of row 0. FPS reads 0 until the
    /// clock has advanced.
    fn overlay_status(&self, scene: &Scene, elapsed_ms: f32, fb: &mut FrameBuffer) {
        let p = &scene.player;
        let status = format!(
            "X={:.2} Y={:.2} A={:.2} FPS={:.1}",
            p.x,
            p.y,
            p.angle,
            Scene::fps(elapsed_ms)
        );
        fb.put_str(0, 0, &status);
    }

    /// Blit the whole map below the status line, then stamp the player
    /// marker. Both writes overwrite whatever the 3D render produced.
    fn overlay_minimap(&self, scene: &Scene, fb: &mut FrameBuffer) {
        for row in 0..scene.map.height() {
            for col in 0..scene.map.width() {
                let ch = if scene.map.is_wall(col, row) { '#' } else { '.' };
                fb.set(MINIMAP_COL + col as u16, MINIMAP_ROW + row as u16, ch);
            }
        }

        let (pcol, prow) = scene.player.tile();
        if scene.map.in_bounds(pcol, prow) {
            fb.set(MINIMAP_COL + pcol as u16, MINIMAP_ROW + prow as u16, 'P');
        }
    }
}

/// Perspective split for one column: rows above `ceiling` are sky, rows
/// after `floor_row` are floor. Structural invariant:
/// `ceiling + floor_row == screen_height` for every distance.
pub fn wall_band(screen_height: u16, distance: f32) -> (i32, i32) {
    let h = screen_height as f32;
    let ceiling = (h / 2.0 - h / distance) as i32;
    (ceiling, screen_height as i32 - ceiling)
}

/// Wall glyph by distance tier; a boundary sample renders as a blank
/// mortar seam regardless of distance.
pub fn wall_shade(sample: &RaySample, max_depth: f32) -> char {
    if sample.boundary {
        return ' ';
    }
    let d = sample.distance;
    if d <= max_depth / 4.0 {
        '█'
    } else if d < max_depth / 3.0 {
        '▓'
    } else if d < max_depth / 2.0 {
        '▒'
    } else if d < max_depth {
        '░'
    } else {
        ' '
    }
}

/// Floor glyph from the vertical gradient: rows near the bottom edge are
/// "close" and dense, rows near the horizon fade to blank.
pub fn floor_shade(y: i32, screen_height: u16) -> char {
    let half = screen_height as f32 / 2.0;
    let b = 1.0 - (y as f32 - half) / half;
    if b < 0.25 {
        '#'
    } else if b < 0.5 {
        'x'
    } else if b < 0.75 {
        '.'
    } else if b < 0.9 {
        '_'
    } else {
        ' '
    }
}

//! Terminal raycaster runner (default binary).
//!
//! One steady-state loop: drain pending key events into the command queue,
//! apply them to the scene scaled by the elapsed time, ray-cast and shade a
//! full frame, flush it to the terminal. Runs until Esc or ctrl-c.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_raycast::core::Scene;
use tui_raycast::input::{map_key, should_quit, CommandQueue};
use tui_raycast::term::{FrameBuffer, SceneView, TerminalRenderer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut scene = Scene::with_defaults();
    let view = SceneView::default();
    let mut queue = CommandQueue::new();

    let mut fb = FrameBuffer::new(scene.config.screen_width, scene.config.screen_height);
    let mut last_tick = Instant::now();
    let mut elapsed_ms = 0.0f32;

    loop {
        // Drain whatever input is pending without blocking the render step.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        queue.push(command);
                    }
                }
            }
        }

        // Movement scales by the previous frame's duration, so a slow frame
        // still covers the same ground per wall-clock second.
        scene.apply_commands(queue.drain(), elapsed_ms);

        view.render_into(&scene, elapsed_ms, &mut fb);
        term.draw_swap(&mut fb)?;

        elapsed_ms = last_tick.elapsed().as_secs_f32() * 1000.0;
        last_tick = Instant::now();
    }
}

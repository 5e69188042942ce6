/*
 * Renderer Module
 *
 * Draws the latest published flock. Each boid is a short segment along
 * its velocity, colored by speed. Simulation space has its origin in the
 * top-left corner with y pointing down; nannou's origin is the window
 * center with y pointing up.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::debug::DebugInfo;
use crate::palette;
use crate::params::{Bounds, SimulationConfig};
use crate::{SEGMENT_LENGTH, SEGMENT_WEIGHT};

// Convert a simulation-space point to window space
pub fn to_screen(p: crate::Vec2, bounds: &Bounds) -> Point2 {
    pt2(p.x - bounds.width / 2.0, bounds.height / 2.0 - p.y)
}

pub fn draw_flock(draw: &Draw, boids: &[Boid], config: &SimulationConfig) {
    for boid in boids {
        let (tail, head) = boid.segment(SEGMENT_LENGTH);
        let [r, g, b] = palette::speed_color(boid.speed(), config.max_velocity);

        draw.line()
            .start(to_screen(tail, &config.bounds))
            .end(to_screen(head, &config.bounds))
            .weight(SEGMENT_WEIGHT)
            .color(rgb(r, g, b));
    }
}

// Outline the bounds and show perception radii around the first boid
pub fn draw_debug_overlay(draw: &Draw, boids: &[Boid], config: &SimulationConfig) {
    draw.rect()
        .x_y(0.0, 0.0)
        .w_h(config.bounds.width, config.bounds.height)
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    if let Some(first) = boids.first() {
        let center = to_screen(first.position, &config.bounds);

        draw.ellipse()
            .xy(center)
            .radius(config.separation_distance)
            .no_fill()
            .stroke(RED)
            .stroke_weight(1.0);

        draw.ellipse()
            .xy(center)
            .radius(config.neighbor_distance)
            .no_fill()
            .stroke(GREEN)
            .stroke_weight(1.0);
    }
}

pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let text_x = window_rect.left() + margin + 70.0;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_info.lines().iter().enumerate() {
        draw.text(text)
            .x_y(text_x, text_y - i as f32 * line_height)
            .color(WHITE)
            .font_size(14);
    }
}

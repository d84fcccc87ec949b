//! What the intersection demo draws, independent of the GL backend.

use crate::config::{AXIS_HALF_LENGTH, CIRCLE_SEGMENTS};
use crate::gesture::Sketch;

pub type Rgba = [f32; 4];

pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const DRAG_GRAY: Rgba = [0.7, 0.7, 0.7, 1.0];
pub const PENDING_GRAY: Rgba = [0.5, 0.5, 0.5, 1.0];

/// Immediate-mode target taking flat `x, y` vertex lists in NDC.
pub trait Surface {
    fn clear(&mut self);

    /// Every consecutive vertex pair is one segment.
    fn draw_lines(&mut self, vertices: &[f32], color: Rgba);

    fn draw_points(&mut self, vertices: &[f32], color: Rgba);
}

pub fn draw_sketch(sketch: &Sketch, surface: &mut impl Surface) {
    surface.clear();

    if let Some(circle) = sketch.circle() {
        let color = if sketch.is_dragging() { DRAG_GRAY } else { GREEN };
        surface.draw_lines(&circle.outline(CIRCLE_SEGMENTS), color);
    }

    if let Some(segment) = sketch.segment() {
        surface.draw_lines(&segment.vertices(), YELLOW);
    }

    if let Some(pending) = sketch.pending_segment() {
        surface.draw_lines(&pending.vertices(), PENDING_GRAY);
    }

    let points = sketch.intersections();
    if !points.is_empty() {
        let vertices: Vec<f32> = points
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32])
            .collect();
        surface.draw_points(&vertices, RED);
    }

    draw_axes(surface);
}

fn draw_axes(surface: &mut impl Surface) {
    let l = AXIS_HALF_LENGTH;
    surface.draw_lines(&[-l, 0.0, l, 0.0], RED);
    surface.draw_lines(&[0.0, -l, 0.0, l], GREEN);
}

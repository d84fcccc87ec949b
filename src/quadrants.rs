//! Four-color viewport split.

use crate::config::MIN_CANVAS_SIDE;
use crate::scene::{Rgba, BLUE, RED, YELLOW};

pub const QUADRANT_GREEN: Rgba = [0.0, 0.8, 0.0, 1.0];

/// Pixel rectangle with a bottom-left origin, as `gl.viewport` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Top-left, top-right, bottom-left, bottom-right.
pub fn quadrants(width: u32, height: u32) -> [(Viewport, Rgba); 4] {
    let w = width as i32;
    let h = height as i32;
    let hw = w / 2;
    let hh = h / 2;
    let rect = |x, y, width, height| Viewport {
        x,
        y,
        width,
        height,
    };

    [
        (rect(0, hh, hw, h - hh), RED),
        (rect(hw, hh, w - hw, h - hh), QUADRANT_GREEN),
        (rect(0, 0, hw, hh), BLUE),
        (rect(hw, 0, w - hw, hh), YELLOW),
    ]
}

/// Side of the square canvas for a window of the given inner size.
pub fn square_side(inner_width: f64, inner_height: f64) -> u32 {
    let min = MIN_CANVAS_SIDE as f64;
    inner_width.max(min).min(inner_height.max(min)) as u32
}

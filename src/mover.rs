//! Keyboard-driven triangle state.

use crate::config::{MOVE_LIMIT, MOVE_STEP};
use crate::scene::{Rgba, BLUE, GREEN, RED};

/// Triangle in model space, centered on the origin.
pub const TRIANGLE: [f32; 6] = [-0.1, -0.1, 0.1, -0.1, 0.0, 0.1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Red,
    Green,
    Blue,
}

impl Tint {
    pub fn rgba(self) -> Rgba {
        match self {
            Tint::Red => RED,
            Tint::Green => GREEN,
            Tint::Blue => BLUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mover {
    pub x: f32,
    pub y: f32,
    pub tint: Tint,
    pub flipped: bool,
}

impl Mover {
    /// Applies a `KeyboardEvent.key` value. Returns false for unbound keys.
    pub fn key(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => {
                if self.y < MOVE_LIMIT {
                    self.y += MOVE_STEP;
                }
            }
            "ArrowDown" => {
                if self.y > -MOVE_LIMIT {
                    self.y -= MOVE_STEP;
                }
            }
            "ArrowRight" => {
                if self.x < MOVE_LIMIT {
                    self.x += MOVE_STEP;
                }
            }
            "ArrowLeft" => {
                if self.x > -MOVE_LIMIT {
                    self.x -= MOVE_STEP;
                }
            }
            "r" | "R" => self.tint = Tint::Red,
            "g" | "G" => self.tint = Tint::Green,
            "b" | "B" => self.tint = Tint::Blue,
            "f" | "F" => self.flipped = !self.flipped,
            _ => return false,
        }
        true
    }

    /// Vertical scale fed to the vertex shader.
    pub fn flip_scale(&self) -> f32 {
        if self.flipped {
            -1.0
        } else {
            1.0
        }
    }
}

//! Build-time settings shared by the demos.

use std::str::FromStr;

use crate::error::DemoError;

/// Id of the canvas every page renders into.
pub const CANVAS_ID: &str = "c";

/// Attribute on the canvas naming the demo to run.
pub const DEMO_ATTRIBUTE: &str = "data-demo";

/// Elements receiving status lines 1..=3, when the page provides them.
pub const STATUS_IDS: [&str; 3] = ["status-1", "status-2", "status-3"];

/// The quadrants canvas never shrinks below this side length.
pub const MIN_CANVAS_SIDE: u32 = 500;
pub const TRIANGLE_CANVAS_SIDE: u32 = 600;
pub const SKETCH_CANVAS_SIDE: u32 = 700;

/// Offset applied per arrow key press.
pub const MOVE_STEP: f32 = 0.01;
/// A move is accepted only while the offset is inside this bound.
pub const MOVE_LIMIT: f32 = 0.9;

pub const CIRCLE_SEGMENTS: usize = 100;
pub const AXIS_HALF_LENGTH: f32 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoKind {
    Quadrants,
    Triangle,
    #[default]
    Intersect,
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quadrants" => Ok(DemoKind::Quadrants),
            "triangle" => Ok(DemoKind::Triangle),
            "intersect" | "intersection" => Ok(DemoKind::Intersect),
            other => Err(DemoError::UnknownDemo(other.to_string())),
        }
    }
}

impl DemoKind {
    /// Resolves the `data-demo` attribute; a missing attribute selects the default.
    pub fn from_attribute(value: Option<&str>) -> Result<Self, DemoError> {
        value.map_or(Ok(DemoKind::default()), |v| v.parse())
    }
}

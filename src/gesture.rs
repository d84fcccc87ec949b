//! Drag-gesture controller for the intersection demo: first a circle
//! (press at the center, drag out the radius), then a segment, then the
//! intersection query.

use log::debug;

use crate::geom::{circle_intersections, Circle, Point, Segment};

/// Which overlay line a status message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    First,
    Second,
    Third,
}

impl StatusLine {
    pub fn index(self) -> usize {
        match self {
            StatusLine::First => 0,
            StatusLine::Second => 1,
            StatusLine::Third => 2,
        }
    }
}

/// Receives human-readable progress messages.
pub trait StatusSink {
    fn update(&mut self, line: StatusLine, text: &str);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    AwaitingCircleCenter,
    DraggingCircleRadius { center: Point },
    AwaitingLineStart,
    DraggingLine { start: Point, end: Option<Point> },
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    gesture: Gesture,
    circle: Option<Circle>,
    segment: Option<Segment>,
    intersections: Vec<Point>,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::AwaitingCircleCenter,
            circle: None,
            segment: None,
            intersections: Vec::new(),
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn circle(&self) -> Option<&Circle> {
        self.circle.as_ref()
    }

    pub fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    pub fn intersections(&self) -> &[Point] {
        &self.intersections
    }

    /// True while the pointer is held down in either drag state.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self.gesture,
            Gesture::DraggingCircleRadius { .. } | Gesture::DraggingLine { .. }
        )
    }

    /// Segment being dragged out but not yet released.
    pub fn pending_segment(&self) -> Option<Segment> {
        match self.gesture {
            Gesture::DraggingLine {
                start,
                end: Some(end),
            } => Some(Segment::new(start, end)),
            _ => None,
        }
    }

    /// Writes the messages shown before any input.
    pub fn announce(&self, status: &mut impl StatusSink) {
        status.update(StatusLine::First, "No line segment");
        status.update(StatusLine::Second, "Click and drag to draw a circle");
        status.update(StatusLine::Third, "Waiting for input");
    }

    /// Returns whether the scene must be redrawn.
    pub fn pointer_down(&mut self, at: Point, status: &mut impl StatusSink) -> bool {
        match self.gesture {
            Gesture::AwaitingCircleCenter => {
                debug!("circle center at ({:.2}, {:.2})", at.x, at.y);
                self.gesture = Gesture::DraggingCircleRadius { center: at };
                status.update(
                    StatusLine::First,
                    &format!("Circle center: ({:.2}, {:.2})", at.x, at.y),
                );
                status.update(StatusLine::Second, "Drag to set circle radius");
            }
            Gesture::AwaitingLineStart => {
                debug!("segment start at ({:.2}, {:.2})", at.x, at.y);
                self.gesture = Gesture::DraggingLine {
                    start: at,
                    end: None,
                };
            }
            _ => {}
        }
        false
    }

    pub fn pointer_move(&mut self, at: Point) -> bool {
        match &mut self.gesture {
            Gesture::DraggingCircleRadius { center } => {
                self.circle = Some(Circle::through(*center, at));
                true
            }
            Gesture::DraggingLine { end, .. } => {
                *end = Some(at);
                true
            }
            _ => false,
        }
    }

    /// Releasing before the first move keeps the drag alive.
    pub fn pointer_up(&mut self, status: &mut impl StatusSink) -> bool {
        match self.gesture {
            Gesture::DraggingCircleRadius { .. } => {
                if let Some(circle) = &self.circle {
                    debug!("circle frozen with radius {:.3}", circle.radius);
                    self.gesture = Gesture::AwaitingLineStart;
                    status.update(StatusLine::Second, "Draw line segment");
                }
                true
            }
            Gesture::DraggingLine {
                start,
                end: Some(end),
            } => {
                self.finish_segment(Segment::new(start, end), status);
                true
            }
            Gesture::Complete => false,
            _ => true,
        }
    }

    /// Drops all geometry and returns to the first step.
    pub fn reset(&mut self, status: &mut impl StatusSink) {
        debug!("sketch reset");
        *self = Self::new();
        self.announce(status);
    }

    fn finish_segment(&mut self, segment: Segment, status: &mut impl StatusSink) {
        let Segment { start, end } = segment;
        status.update(
            StatusLine::Second,
            &format!(
                "Line segment: ({:.2}, {:.2}) ~ ({:.2}, {:.2})",
                start.x, start.y, end.x, end.y
            ),
        );

        self.intersections = match &self.circle {
            Some(circle) => circle_intersections(&segment, circle),
            None => Vec::new(),
        };
        status.update(StatusLine::Third, &describe(&self.intersections));
        debug!("{} intersection(s)", self.intersections.len());

        self.segment = Some(segment);
        self.gesture = Gesture::Complete;
    }
}

fn describe(points: &[Point]) -> String {
    if points.is_empty() {
        return "No intersections".to_string();
    }
    let mut text = format!("Intersections: {}\n", points.len());
    for (i, p) in points.iter().enumerate() {
        text.push_str(&format!("Point {}: ({:.2}, {:.2})\n", i + 1, p.x, p.y));
    }
    text
}

//! 2D primitives in normalized device coordinates and the circle/segment
//! intersection query.

use std::f64::consts::TAU;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance(self, other: Point) -> f64 {
        let d = self - other;
        d.dot(d).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}

/// Ordered pair of endpoints, parametrized as `start + t * (end - start)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    pub fn length_squared(&self) -> f64 {
        let d = self.direction();
        d.dot(d)
    }

    pub fn point_at(&self, t: f64) -> Point {
        self.start + self.direction() * t
    }

    /// Endpoints flattened for a `LINES` vertex upload.
    pub fn vertices(&self) -> [f32; 4] {
        [
            self.start.x as f32,
            self.start.y as f32,
            self.end.x as f32,
            self.end.y as f32,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Negative (or NaN) radii collapse to zero.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Circle centered at `center` whose boundary passes through `rim`.
    pub fn through(center: Point, rim: Point) -> Self {
        Self::new(center, center.distance(rim))
    }

    /// Boundary approximated by `segments` chords, as a `LINES` vertex list
    /// of `4 * segments` floats.
    pub fn outline(&self, segments: usize) -> Vec<f32> {
        let step = TAU / segments.max(1) as f64;
        let at = |i: usize| {
            let a = i as f64 * step;
            [
                (self.center.x + self.radius * a.cos()) as f32,
                (self.center.y + self.radius * a.sin()) as f32,
            ]
        };

        let mut vertices = Vec::with_capacity(segments * 4);
        for i in 0..segments {
            vertices.extend_from_slice(&at(i));
            vertices.extend_from_slice(&at(i + 1));
        }
        vertices
    }
}

/// Points where `segment` crosses the boundary of `circle`.
///
/// Substitutes the parametric segment into the circle equation and keeps the
/// roots with `t` in `[0, 1]`, ordered as `[(-b + sqrt(D)) / 2a, (-b - sqrt(D)) / 2a]`.
/// A zero-length segment yields no points. A discriminant within a relative
/// tolerance of zero counts as tangency and its root is reported once.
pub fn circle_intersections(segment: &Segment, circle: &Circle) -> Vec<Point> {
    let d = segment.direction();
    let f = segment.start - circle.center;

    let a = d.dot(d);
    if a == 0.0 {
        return Vec::new();
    }
    let b = 2.0 * d.dot(f);
    let c = f.dot(f) - circle.radius * circle.radius;

    // Rounding in `b * b` and `4ac` leaves exact tangents a few ulps off zero.
    let discriminant = b * b - 4.0 * a * c;
    let eps = 1e-12 * (b * b).max((4.0 * a * c).abs()).max(f64::MIN_POSITIVE);
    if discriminant < -eps {
        return Vec::new();
    }

    let roots = if discriminant.abs() <= eps {
        [Some(-b / (2.0 * a)), None]
    } else {
        let root = discriminant.sqrt();
        [Some((-b + root) / (2.0 * a)), Some((-b - root) / (2.0 * a))]
    };

    roots
        .into_iter()
        .flatten()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| segment.point_at(t))
        .collect()
}

/// Maps a canvas-relative pixel position to NDC (y axis pointing up).
pub fn to_ndc(px: f64, py: f64, width: f64, height: f64) -> Point {
    Point::new((px / width) * 2.0 - 1.0, -((py / height) * 2.0 - 1.0))
}

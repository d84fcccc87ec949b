use assert_approx_eq::assert_approx_eq;
use gl_demos_wasm::geom::{circle_intersections, Circle, Point, Segment};

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}

fn circle(cx: f64, cy: f64, r: f64) -> Circle {
    Circle::new(Point::new(cx, cy), r)
}

fn assert_point(p: Point, x: f64, y: f64) {
    assert_approx_eq!(p.x, x, 1e-9);
    assert_approx_eq!(p.y, y, 1e-9);
}

/// Parameter of `p` along `s`, by projection.
fn parameter(s: &Segment, p: Point) -> f64 {
    let d = s.direction();
    (p - s.start).dot(d) / d.dot(d)
}

#[test]
fn horizontal_chord_through_unit_circle() {
    let hits = circle_intersections(&seg(-2.0, 0.0, 2.0, 0.0), &circle(0.0, 0.0, 1.0));
    assert_eq!(hits.len(), 2);
    assert_point(hits[0], 1.0, 0.0);
    assert_point(hits[1], -1.0, 0.0);
}

#[test]
fn segment_beyond_circle_on_same_line() {
    let hits = circle_intersections(&seg(2.0, 0.0, 3.0, 0.0), &circle(0.0, 0.0, 1.0));
    assert!(hits.is_empty());
}

#[test]
fn segment_inside_circle_never_reaches_boundary() {
    let hits = circle_intersections(&seg(0.0, 0.0, 0.0, 0.5), &circle(0.0, 0.0, 1.0));
    assert!(hits.is_empty());
}

#[test]
fn vertical_line_through_offset_center() {
    let hits = circle_intersections(&seg(1.0, 0.0, 1.0, 2.0), &circle(1.0, 1.0, 0.5));
    assert_eq!(hits.len(), 2);
    // larger root first
    assert_point(hits[0], 1.0, 1.5);
    assert_point(hits[1], 1.0, 0.5);
}

#[test]
fn line_missing_circle_is_empty() {
    // perpendicular distance 1.5 > r
    let hits = circle_intersections(&seg(-2.0, 1.5, 2.0, 1.5), &circle(0.0, 0.0, 1.0));
    assert!(hits.is_empty());

    let hits = circle_intersections(&seg(0.0, 3.0, 3.0, 0.0), &circle(0.0, 0.0, 2.0));
    assert!(hits.is_empty());
}

#[test]
fn tangent_point_reported_once() {
    let c = circle(0.0, 0.0, 1.0);
    let hits = circle_intersections(&seg(-2.0, 1.0, 2.0, 1.0), &c);
    assert_eq!(hits.len(), 1);
    assert_point(hits[0], 0.0, 1.0);
    assert_approx_eq!(hits[0].distance(c.center), 1.0, 1e-9);
}

#[test]
fn tangent_with_rounded_arithmetic_on_unit_circle() {
    let c = circle(0.0, 0.0, 1.0);
    for x0 in [-0.3, -0.7, -0.1, -0.45] {
        let hits = circle_intersections(&seg(x0, 1.0, x0 + 1.0, 1.0), &c);
        assert_eq!(hits.len(), 1, "x0 = {x0}, hits = {hits:?}");
        assert_approx_eq!(hits[0].x, 0.0, 1e-9);
        assert_approx_eq!(hits[0].y, 1.0, 1e-9);
    }
}

#[test]
fn tangent_with_offset_center() {
    let c = circle(0.37, -0.21, 0.43);

    // horizontal tangent above the center
    let y = -0.21 + 0.43;
    let hits = circle_intersections(&seg(0.08, y, 0.68, y), &c);
    assert_eq!(hits.len(), 1, "hits = {hits:?}");
    assert_approx_eq!(hits[0].distance(c.center), c.radius, 1e-6);
    assert_approx_eq!(hits[0].x, 0.37, 1e-6);

    // vertical tangent left of the center
    let x = 0.37 - 0.43;
    let hits = circle_intersections(&seg(x, -0.93, x, 0.61), &c);
    assert_eq!(hits.len(), 1, "hits = {hits:?}");
    assert_approx_eq!(hits[0].distance(c.center), c.radius, 1e-6);
    assert_approx_eq!(hits[0].y, -0.21, 1e-6);
}

#[test]
fn tangent_along_a_diagonal() {
    // direction (0.6, 0.8), touching at center + r * (-0.8, 0.6)
    let c = circle(0.1, 0.2, 0.3);
    let touch = Point::new(0.1 - 0.3 * 0.8, 0.2 + 0.3 * 0.6);
    let s = seg(
        touch.x - 0.5 * 0.6,
        touch.y - 0.5 * 0.8,
        touch.x + 0.7 * 0.6,
        touch.y + 0.7 * 0.8,
    );
    let hits = circle_intersections(&s, &c);
    assert_eq!(hits.len(), 1, "hits = {hits:?}");
    assert_approx_eq!(hits[0].distance(c.center), c.radius, 1e-6);
    assert_approx_eq!(hits[0].x, touch.x, 1e-6);
    assert_approx_eq!(hits[0].y, touch.y, 1e-6);
}

#[test]
fn shallow_chord_still_gives_two_points() {
    let hits = circle_intersections(&seg(-2.0, 0.999, 2.0, 0.999), &circle(0.0, 0.0, 1.0));
    assert_eq!(hits.len(), 2);
    assert!(hits[0].x > 0.0 && hits[1].x < 0.0);
}

#[test]
fn endpoints_on_boundary_are_included() {
    let c = circle(0.0, 0.0, 1.0);

    let hits = circle_intersections(&seg(1.0, 0.0, 2.0, 0.0), &c);
    assert_eq!(hits.len(), 1);
    assert_point(hits[0], 1.0, 0.0);

    let hits = circle_intersections(&seg(2.0, 0.0, 1.0, 0.0), &c);
    assert_eq!(hits.len(), 1);
    assert_point(hits[0], 1.0, 0.0);
}

#[test]
fn one_endpoint_inside_gives_single_crossing() {
    let hits = circle_intersections(&seg(0.0, 0.0, 0.0, 2.0), &circle(0.0, 0.0, 1.0));
    assert_eq!(hits.len(), 1);
    assert_point(hits[0], 0.0, 1.0);
}

#[test]
fn zero_length_segment_is_empty() {
    let c = circle(0.0, 0.0, 1.0);
    assert!(circle_intersections(&seg(1.0, 0.0, 1.0, 0.0), &c).is_empty());
    assert!(circle_intersections(&seg(0.0, 0.0, 0.0, 0.0), &c).is_empty());
}

#[test]
fn zero_radius_circle_on_segment() {
    let hits = circle_intersections(&seg(-1.0, 0.0, 1.0, 0.0), &circle(0.0, 0.0, 0.0));
    assert_eq!(hits.len(), 1);
    assert_point(hits[0], 0.0, 0.0);
}

#[test]
fn negative_radius_collapses_to_zero() {
    assert_eq!(circle(0.0, 0.0, -3.0).radius, 0.0);
}

#[test]
fn hits_lie_on_circle_and_within_segment() {
    let c = circle(0.2, -0.1, 0.6);
    for i in 0..24 {
        let a = i as f64 * std::f64::consts::TAU / 24.0;
        for reach in [0.3, 0.7, 1.2, 2.0] {
            let s = seg(
                -0.9 + 0.05 * i as f64,
                0.8,
                -0.9 + 0.05 * i as f64 + reach * a.cos(),
                0.8 + reach * a.sin() - 1.5,
            );
            let hits = circle_intersections(&s, &c);
            assert!(hits.len() <= 2);
            for p in hits {
                assert_approx_eq!(p.distance(c.center), c.radius, 1e-6);
                let t = parameter(&s, p);
                assert!((-1e-9..=1.0 + 1e-9).contains(&t), "t = {t}");
            }
        }
    }
}

#[test]
fn repeated_queries_agree() {
    let s = seg(-0.7, -0.3, 0.9, 0.4);
    let c = circle(0.1, 0.0, 0.5);
    assert_eq!(circle_intersections(&s, &c), circle_intersections(&s, &c));
}

#[test]
fn outline_vertices_lie_on_circle() {
    let c = circle(0.25, -0.5, 0.4);
    let v = c.outline(100);
    assert_eq!(v.len(), 400);
    for xy in v.chunks(2) {
        let p = Point::new(xy[0] as f64, xy[1] as f64);
        assert_approx_eq!(p.distance(c.center), 0.4, 1e-5);
    }
    // closed: last chord ends where the first begins
    assert_approx_eq!(v[398], v[0], 1e-5);
    assert_approx_eq!(v[399], v[1], 1e-5);
}

#[test]
fn circle_through_rim_point() {
    let c = Circle::through(Point::new(0.0, 0.0), Point::new(0.3, 0.4));
    assert_approx_eq!(c.radius, 0.5, 1e-12);
}

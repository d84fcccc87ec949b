use assert_approx_eq::assert_approx_eq;
use gl_demos_wasm::mover::{Mover, Tint};
use gl_demos_wasm::scene::{BLUE, GREEN, RED};

#[test]
fn starts_red_and_centered() {
    let m = Mover::default();
    assert_eq!((m.x, m.y), (0.0, 0.0));
    assert_eq!(m.tint.rgba(), RED);
    assert_eq!(m.flip_scale(), 1.0);
}

#[test]
fn arrows_step_the_offset() {
    let mut m = Mover::default();
    assert!(m.key("ArrowUp"));
    assert!(m.key("ArrowUp"));
    assert!(m.key("ArrowLeft"));
    assert_approx_eq!(m.y, 0.02, 1e-6);
    assert_approx_eq!(m.x, -0.01, 1e-6);

    m.key("ArrowDown");
    m.key("ArrowRight");
    m.key("ArrowRight");
    assert_approx_eq!(m.y, 0.01, 1e-6);
    assert_approx_eq!(m.x, 0.01, 1e-6);
}

#[test]
fn movement_stops_at_the_limit() {
    let mut m = Mover::default();
    for _ in 0..500 {
        m.key("ArrowUp");
        m.key("ArrowLeft");
    }
    // one step may overshoot the bound, never more
    assert!(m.y >= 0.9 && m.y < 0.9 + 0.011, "y = {}", m.y);
    assert!(m.x <= -0.9 && m.x > -0.9 - 0.011, "x = {}", m.x);

    let y = m.y;
    m.key("ArrowUp");
    assert_eq!(m.y, y);
}

#[test]
fn color_keys_and_flip() {
    let mut m = Mover::default();
    assert!(m.key("g"));
    assert_eq!(m.tint, Tint::Green);
    assert_eq!(m.tint.rgba(), GREEN);
    assert!(m.key("b"));
    assert_eq!(m.tint.rgba(), BLUE);
    assert!(m.key("r"));
    assert_eq!(m.tint, Tint::Red);

    assert!(m.key("f"));
    assert_eq!(m.flip_scale(), -1.0);
    assert!(m.key("f"));
    assert_eq!(m.flip_scale(), 1.0);
}

#[test]
fn unbound_keys_change_nothing() {
    let mut m = Mover::default();
    assert!(!m.key("x"));
    assert!(!m.key("Enter"));
    assert_eq!(m, Mover::default());
}

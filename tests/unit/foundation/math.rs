use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::*;

#[test]
fn length_and_distance_agree() {
    assert_eq!(length(Vec2::new(3.0, 4.0)), 5.0);
    assert_eq!(distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0);
}

#[test]
fn midpoint_is_exact_for_integers() {
    assert_eq!(
        midpoint(Point::new(250.0, 50.0), Point::new(550.0, 50.0)),
        Point::new(400.0, 50.0)
    );
}

#[test]
fn turn_angle_of_square_corner_is_quarter_turn() {
    let a = turn_angle(Vec2::new(-300.0, 0.0), Vec2::new(0.0, 500.0));
    assert!((a - FRAC_PI_2).abs() < 1e-12);
    // Winding direction does not matter.
    let b = turn_angle(Vec2::new(0.0, 500.0), Vec2::new(-300.0, 0.0));
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn turn_angle_of_straight_run_is_zero() {
    let a = turn_angle(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
    assert!(a.abs() < 1e-12);
}

#[test]
fn turn_angle_of_obtuse_corner() {
    // 135° interior angle between the edges.
    let a = turn_angle(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 1.0));
    assert!((a - FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn finiteness_check() {
    assert!(is_finite_point(Point::new(0.0, -1.0)));
    assert!(!is_finite_point(Point::new(f64::NAN, 0.0)));
    assert!(!is_finite_point(Point::new(0.0, f64::INFINITY)));
}

mod support;

use gnomon::DialError;
use gnomon::circle::push_onto_circle;
use nalgebra::Point2;
use support::approx_eq;

#[test]
fn pushed_point_lands_on_the_circle_along_the_ray() {
    let point = Point2::new(3.0, 4.0);
    let pushed = push_onto_circle(point, Point2::origin(), 10.0).unwrap();
    assert!(approx_eq(pushed.coords.norm(), 10.0, 1e-9));
    // Same ray from the anchor, not the antipodal intersection.
    assert!(approx_eq(pushed.x, 6.0, 1e-9));
    assert!(approx_eq(pushed.y, 8.0, 1e-9));
}

#[test]
fn stays_on_the_point_side_of_the_anchor() {
    // Line y = x through an off-origin anchor; the root towards the
    // point is the positive one.
    let pushed =
        push_onto_circle(Point2::new(6.0, 6.0), Point2::new(5.0, 5.0), 8.0_f64.sqrt())
            .unwrap();
    assert!(approx_eq(pushed.x, 2.0, 1e-9));
    assert!(approx_eq(pushed.y, 2.0, 1e-9));

    let opposite =
        push_onto_circle(Point2::new(4.0, 4.0), Point2::new(5.0, 5.0), 8.0_f64.sqrt())
            .unwrap();
    assert!(approx_eq(opposite.x, -2.0, 1e-9));
    assert!(approx_eq(opposite.y, -2.0, 1e-9));
}

#[test]
fn vertical_direction_degenerates_to_the_pole() {
    let up = push_onto_circle(Point2::new(2.0, 7.0), Point2::new(2.0, 1.0), 5.0).unwrap();
    assert_eq!(up, Point2::new(0.0, 5.0));

    let down =
        push_onto_circle(Point2::new(-3.0, -7.0), Point2::new(-3.0, 0.0), 5.0).unwrap();
    assert_eq!(down, Point2::new(0.0, -5.0));
}

#[test]
fn sign_of_zero_resolves_to_positive() {
    let pushed = push_onto_circle(Point2::new(2.0, 0.0), Point2::new(2.0, -3.0), 5.0).unwrap();
    assert_eq!(pushed, Point2::new(0.0, 5.0));
}

#[test]
fn a_radius_the_line_cannot_reach_is_a_distinct_error() {
    // The direction line runs at height 5, the circle has radius 2:
    // no intersection exists and clamping would hide a real
    // configuration problem.
    let result = push_onto_circle(Point2::new(1.0, 5.0), Point2::new(0.0, 5.0), 2.0);
    assert!(matches!(result, Err(DialError::RadiusTooSmall { .. })));
}

mod support;

use gnomon::float_types::{EPSILON, Real};
use gnomon::{DeclinationSet, Sundial};
use support::{approx_eq, declining_dial, direct_dial};

#[test]
fn always_24_lines_in_hour_order() {
    let declinations = DeclinationSet::standard();
    for dial in [direct_dial(), declining_dial()] {
        let lines = dial.compute_hour_lines(&declinations);
        assert_eq!(lines.len(), 24);
        for (index, line) in lines.iter().enumerate() {
            assert_eq!(line.offset(), index as i32 - 12);
            assert_eq!(line.time_index(), index);
        }
    }
}

/// Recomputing the visibility scalar for every stored point must give
/// a non-negative value: the engine never stores a point the sun
/// cannot cast.
#[test]
fn stored_points_pass_the_visibility_test() {
    let dial = declining_dial();
    let declinations = DeclinationSet::standard();
    let phi = dial.latitude().to_radians();
    let d = dial.plane_declination().to_radians();
    let z = dial.zenithal_distance().to_radians();
    let p = dial.stylus_plane_sine();

    for line in dial.compute_hour_lines(&declinations) {
        let hour_angle =
            ((line.offset() as Real) * 15.0 + dial.longitude() % 15.0).to_radians();
        for (degrees, _) in line.iter() {
            let q = d.sin() * z.sin() * hour_angle.sin()
                + (phi.cos() * z.cos() + phi.sin() * z.sin() * d.cos()) * hour_angle.cos()
                + p * degrees.to_radians().tan();
            assert!(q >= 0.0, "declination {degrees} stored with q = {q}");
        }
    }
}

#[test]
fn every_stored_point_is_finite_and_within_the_guard() {
    let declinations = DeclinationSet::standard();
    let placements = [
        (45.0, 0.0, 0.0, 15.0, 0.0),
        (48.8, 10.0, 55.0, 15.0, 2.3),
        (0.0, 0.0, 90.0, 15.0, 0.0),
        (-33.9, 170.0, 20.0, 8.0, 18.5),
    ];
    for (phi, d, z, a, l) in placements {
        let dial = Sundial::new(phi, d, z, a, l).unwrap();
        for line in dial.compute_hour_lines(&declinations) {
            for (_, point) in line.iter() {
                assert!(point.x.is_finite() && point.y.is_finite());
                assert!(point.coords.norm_squared() < 900.0 * a * a);
            }
        }
    }
}

/// An equatorial plane with a horizontal stylus puts the equinox
/// shadow at infinity for every hour; the guard has to swallow it
/// while the solstice curves survive.
#[test]
fn near_tangent_blowups_are_omitted_not_stored() {
    let dial = Sundial::new(0.0, 0.0, 90.0, 15.0, 0.0).unwrap();
    let declinations = DeclinationSet::standard();
    let lines = dial.compute_hour_lines(&declinations);
    for line in &lines {
        assert!(line.get(0.0).is_none());
    }
    // The winter solstice stays visible (and finite) all day on this
    // placement.
    assert!(lines.iter().all(|line| line.get(-23.44).is_some()));
}

#[test]
fn noon_line_of_a_direct_dial_is_vertical() {
    let dial = direct_dial();
    let lines = dial.compute_hour_lines(&DeclinationSet::standard());
    let noon = &lines[12];
    assert_eq!(noon.offset(), 0);
    let point = noon.get(0.0).expect("equinox visible at noon");
    assert!(point.x.abs() < EPSILON);
    assert!(approx_eq(point.y, 15.0, 1e-9));
    // In render convention the shadow extends towards the viewer.
    assert!(gnomon::layout::flip_y(point).y < 0.0);
}

#[test]
fn longitude_folds_into_the_hour_angle_modulo_fifteen() {
    let declinations = DeclinationSet::standard();
    let base = Sundial::new(45.0, 0.0, 0.0, 15.0, 2.5).unwrap();
    // 17.5° = 15° + 2.5°: same fold, identical geometry.
    let shifted = Sundial::new(45.0, 0.0, 0.0, 15.0, 17.5).unwrap();
    let base_lines = base.compute_hour_lines(&declinations);
    let shifted_lines = shifted.compute_hour_lines(&declinations);
    for (a, b) in base_lines.iter().zip(shifted_lines.iter()) {
        assert_eq!(a, b);
    }
}

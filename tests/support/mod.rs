//! Test support library
//! Shared helpers for the integration tests.

use gnomon::Sundial;
use gnomon::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable
/// tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A direct-facing dial at 45° latitude with a 15-unit stylus; the
/// simplest non-degenerate placement.
pub fn direct_dial() -> Sundial {
    Sundial::new(45.0, 0.0, 0.0, 15.0, 0.0).unwrap()
}

/// A declining dial with everything non-trivial: off-axis plane,
/// tilted stylus, non-zero longitude.
pub fn declining_dial() -> Sundial {
    Sundial::new(48.8, 10.0, 55.0, 15.0, 2.3).unwrap()
}

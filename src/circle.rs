//! Projection of dial points onto a bounding circle.

use nalgebra::Point2;

use crate::errors::{DialError, Result};
use crate::float_types::Real;

/// Push `point` onto the circle of `radius` centered on the dial
/// origin, along the line through `anchor` and `point`, keeping the
/// intersection on `point`'s side of `anchor`.
///
/// When the direction line is vertical the intersection degenerates to
/// `(0, ±radius)`, with the sign taken from `point.y` (a zero resolves
/// to positive).
///
/// # Errors
///
/// [`DialError::RadiusTooSmall`] when the direction line misses the
/// circle entirely, i.e. the requested radius cannot reach the dial
/// geometry. This is fatal for the caller, not something to clamp.
pub fn push_onto_circle(
    point: Point2<Real>,
    anchor: Point2<Real>,
    radius: Real,
) -> Result<Point2<Real>> {
    if anchor.x == point.x {
        return Ok(Point2::new(0.0, radius.copysign(point.y)));
    }

    let dir_coef = (point.y - anchor.y) / (point.x - anchor.x);
    let offset = anchor.y - anchor.x * dir_coef;
    let delta = radius * radius * (1.0 + dir_coef * dir_coef) - offset * offset;
    if delta < 0.0 {
        return Err(DialError::RadiusTooSmall { radius });
    }
    let x_1 = (-dir_coef * offset - delta.sqrt()) / (1.0 + dir_coef * dir_coef);
    let x_2 = (-dir_coef * offset + delta.sqrt()) / (1.0 + dir_coef * dir_coef);
    // Both candidates are colinear with the anchor, the x displacement
    // sign settles which side each one lies on.
    let x = if (point.x - anchor.x) * (x_1 - anchor.x) >= 0.0 {
        x_1
    } else {
        x_2
    };
    Ok(Point2::new(x, dir_coef * x + offset))
}

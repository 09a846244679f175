//! Sundial placement parameters and their derived geometry.

use nalgebra::Point2;

use crate::errors::{DialError, Result};
use crate::float_types::Real;

/// A planar sundial, fixed by its placement on Earth and by the stylus
/// that casts the shadow.
///
/// All angles are degrees. The stylus length is unit-agnostic and sets
/// the scale of every coordinate the crate produces. Derived fields
/// (`stylus_plane_sine`, `center`) are computed once at construction
/// and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Sundial {
    latitude: Real,
    plane_declination: Real,
    zenithal_distance: Real,
    stylus_length: Real,
    longitude: Real,
    stylus_plane_sine: Real,
    center: Point2<Real>,
}

impl Sundial {
    /// Build a dial from its five placement scalars.
    ///
    /// # Parameters
    ///
    /// - `latitude`: latitude in degrees, positive towards north
    /// - `plane_declination`: angle between the dial plane's
    ///   perpendicular and true south, degrees
    /// - `zenithal_distance`: angle of the stylus from the zenith,
    ///   degrees
    /// - `stylus_length`: length of the stylus, must be positive
    /// - `longitude`: longitude in degrees, folded into the hour angle
    pub fn new(
        latitude: Real,
        plane_declination: Real,
        zenithal_distance: Real,
        stylus_length: Real,
        longitude: Real,
    ) -> Result<Self> {
        if !(stylus_length > 0.0) {
            return Err(DialError::NonPositiveStylusLength(stylus_length));
        }
        let phi = latitude.to_radians();
        let d = plane_declination.to_radians();
        let z = zenithal_distance.to_radians();
        let p = phi.sin() * z.cos() - phi.cos() * z.sin() * d.cos();
        // Zenithal distance equal to the latitude makes the stylus
        // parallel to the plane; the center is then taken at the origin.
        let center = if p == 0.0 {
            Point2::origin()
        } else {
            Point2::new(
                stylus_length * phi.cos() * d.sin() / p,
                -stylus_length * (phi.sin() * z.sin() + phi.cos() * z.cos() * d.cos()) / p,
            )
        };
        Ok(Self {
            latitude,
            plane_declination,
            zenithal_distance,
            stylus_length,
            longitude,
            stylus_plane_sine: p,
            center,
        })
    }

    pub fn latitude(&self) -> Real {
        self.latitude
    }

    pub fn longitude(&self) -> Real {
        self.longitude
    }

    pub fn plane_declination(&self) -> Real {
        self.plane_declination
    }

    pub fn zenithal_distance(&self) -> Real {
        self.zenithal_distance
    }

    pub fn stylus_length(&self) -> Real {
        self.stylus_length
    }

    /// Sine of the angle between the polar stylus and the dial plane,
    /// the `P` term of the hour line equations.
    pub fn stylus_plane_sine(&self) -> Real {
        self.stylus_plane_sine
    }

    /// Point where the stylus axis meets the dial plane, in dial
    /// coordinates. The origin when the geometry is degenerate.
    pub fn center(&self) -> Point2<Real> {
        self.center
    }

    /// Angle of the polar stylus with the dial plane, in degrees.
    pub fn stylus_angle(&self) -> Real {
        self.stylus_plane_sine.abs().asin().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::EPSILON;

    #[test]
    fn direct_horizontal_style_dial() {
        let dial = Sundial::new(45.0, 0.0, 0.0, 15.0, 0.0).unwrap();
        assert!((dial.stylus_angle() - 45.0).abs() < EPSILON);
        assert!(dial.center().x.abs() < EPSILON);
        assert!((dial.center().y + 15.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_plane_angle_centers_on_origin() {
        // latitude 0, zenithal distance 0, plane declination 0 gives P == 0
        let dial = Sundial::new(0.0, 0.0, 0.0, 15.0, 0.0).unwrap();
        assert_eq!(dial.stylus_plane_sine(), 0.0);
        assert_eq!(dial.center(), Point2::origin());
    }

    #[test]
    fn stylus_length_must_be_positive() {
        assert!(matches!(
            Sundial::new(45.0, 0.0, 0.0, 0.0, 0.0),
            Err(DialError::NonPositiveStylusLength(_))
        ));
        assert!(matches!(
            Sundial::new(45.0, 0.0, 0.0, -3.0, 0.0),
            Err(DialError::NonPositiveStylusLength(_))
        ));
    }
}

//! Hour line computation, the heart of the dial.
//!
//! For every integer hour offset from solar noon and every reference
//! declination, the engine intersects the shadow ray with the dial
//! plane. Hours the sun never reaches for a given declination simply
//! have no entry; nothing here is an error.

use nalgebra::Point2;

use crate::declination::DeclinationSet;
use crate::dial::Sundial;
use crate::float_types::{DEGREES_PER_HOUR, Real};

/// Points further than `sqrt(900)` stylus lengths from the origin are
/// numerical noise from near-tangent geometry and are dropped. This is
/// a tunable guard, not a contract; it also swallows the infinities a
/// vanishing illumination term would otherwise produce.
pub(crate) const SANITY_RADIUS_SQ_FACTOR: Real = 900.0;

/// One hour line: the shadow intersections for a single hour offset
/// from solar noon, one entry per reference declination that actually
/// sees the sun at that hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourLine {
    offset: i32,
    points: Vec<(Real, Point2<Real>)>,
}

impl HourLine {
    pub(crate) fn from_parts(offset: i32, points: Vec<(Real, Point2<Real>)>) -> Self {
        Self { offset, points }
    }

    /// Hour offset from solar noon, `-12..=11`.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Position of this line in the 24-entry sequence, `0..=23`.
    /// Doubles as the hour number printed next to the line.
    pub fn time_index(&self) -> usize {
        (self.offset + 12) as usize
    }

    /// Intersection point for the given declination, if the sun
    /// illuminates the plane at this hour.
    pub fn get(&self, degrees: Real) -> Option<Point2<Real>> {
        self.points
            .iter()
            .find(|(d, _)| *d == degrees)
            .map(|(_, p)| *p)
    }

    /// Iterate `(declination_degrees, point)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Real, Point2<Real>)> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Real, &Point2<Real>) -> bool) {
        self.points.retain(|(d, p)| keep(*d, p));
    }
}

impl Sundial {
    /// Compute the full set of 24 hour lines, hour-ordered from -12
    /// (midnight) through +11.
    ///
    /// For each hour offset `h` and declination `delta`, the visibility
    /// scalar `q` tells whether the sun shines on the plane; when it
    /// does, the shadow direction `(nx, ny)` scaled by `stylus_length / q`
    /// is the intersection point. Only finite points inside the sanity
    /// radius are retained.
    pub fn compute_hour_lines(&self, declinations: &DeclinationSet) -> Vec<HourLine> {
        let phi = self.latitude().to_radians();
        let d = self.plane_declination().to_radians();
        let z = self.zenithal_distance().to_radians();
        let a = self.stylus_length();
        let p = self.stylus_plane_sine();

        let mut lines = Vec::with_capacity(24);
        for offset in -12..12 {
            let hour_angle = ((offset as Real) * DEGREES_PER_HOUR
                + self.longitude() % DEGREES_PER_HOUR)
                .to_radians();
            let mut points = Vec::new();
            for declination in declinations.iter() {
                let tan_delta = declination.degrees.to_radians().tan();
                let q = d.sin() * z.sin() * hour_angle.sin()
                    + (phi.cos() * z.cos() + phi.sin() * z.sin() * d.cos())
                        * hour_angle.cos()
                    + p * tan_delta;
                if q < 0.0 {
                    // Sun does not illuminate the plane for this declination
                    continue;
                }
                let nx = d.cos() * hour_angle.sin()
                    - d.sin() * (phi.sin() * hour_angle.cos() - phi.cos() * tan_delta);
                let ny = z.cos() * d.sin() * hour_angle.sin()
                    - (phi.cos() * z.sin() - phi.sin() * z.cos() * d.cos())
                        * hour_angle.cos()
                    - (phi.sin() * z.sin() + phi.cos() * z.cos() * d.cos()) * tan_delta;
                let point = Point2::new(a * nx / q, a * ny / q);
                if point.coords.norm_squared() < SANITY_RADIUS_SQ_FACTOR * a * a {
                    points.push((declination.degrees, point));
                }
            }
            lines.push(HourLine { offset, points });
        }
        lines
    }
}

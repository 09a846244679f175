//! Clipping, bounding and label placement for a drawable dial.
//!
//! The geometry engine works y-up; drawings are y-down. [`flip_y`] is
//! the single place where the two conventions meet, and every adapter
//! goes through the [`DialLayout`] this module produces.

use geo::{Coord, Line, Rect, coord};
use nalgebra::Point2;

use crate::circle::push_onto_circle;
use crate::declination::DeclinationSet;
use crate::dial::Sundial;
use crate::errors::{DialError, Result};
use crate::float_types::Real;
use crate::hour_lines::HourLine;

/// Margin left around the drawing when scaling the bounding box.
const SCALE_FACTOR: Real = 1.1;
/// Legend line count the font size is derived from: the legend spans
/// an eighth of the drawing height.
const LEGEND_LINES: Real = 5.0;

/// The furthest surviving point on one hour line, where the hour
/// number is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourMark {
    pub at: Coord<Real>,
    pub time_index: usize,
}

/// One declination curve as drawable segments, hour-ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclinationLine {
    pub label: String,
    pub segments: Vec<Line<Real>>,
}

/// Everything the vector adapter needs, in render convention
/// (y grows downwards).
#[derive(Debug, Clone, PartialEq)]
pub struct DialLayout {
    /// Final bounding box, margin applied.
    pub bounds: Rect<Real>,
    /// Scaled drawing width.
    pub width: Real,
    /// Scaled drawing height.
    pub height: Real,
    /// Font size for hour numbers and the legend.
    pub font_size: Real,
    /// Length and width of the axis arrow head.
    pub arrow_shape: (Real, Real),
    /// Every surviving intersection point.
    pub points: Vec<Coord<Real>>,
    /// Furthest point per hour line.
    pub hour_marks: Vec<HourMark>,
    /// Anchor of the hour number next to each mark.
    pub hour_labels: Vec<HourMark>,
    /// Per-declination segment chains.
    pub declination_lines: Vec<DeclinationLine>,
    /// Dial center.
    pub center: Coord<Real>,
    /// Bounding radius the layout was clipped to, if any.
    pub max_radius: Option<Real>,
}

/// Flip a model point into render convention.
pub fn flip_y(point: Point2<Real>) -> Coord<Real> {
    coord! { x: point.x, y: -point.y }
}

fn to_point(coord: Coord<Real>) -> Point2<Real> {
    Point2::new(coord.x, coord.y)
}

/// Drop from every hour line the points further than `max_radius` from
/// the dial origin. Only ever removes points; reapplying with the same
/// radius is a no-op, and a larger radius never removes a survivor of
/// a smaller one.
pub fn clip_hour_lines(hour_lines: &mut [HourLine], max_radius: Real) {
    for line in hour_lines.iter_mut() {
        line.retain(|_, point| point.coords.norm_squared() <= max_radius * max_radius);
    }
}

/// Clip (optionally), bound and place labels for the given hour lines.
///
/// The input is not mutated; clipping happens on a private copy. Fails
/// with [`DialError::NonPositiveRadius`] for a radius that is not
/// strictly positive, [`DialError::EmptyDial`] when nothing survives,
/// and propagates [`DialError::RadiusTooSmall`] unchanged from the
/// circle projection.
pub fn lay_out(
    sundial: &Sundial,
    hour_lines: &[HourLine],
    declinations: &DeclinationSet,
    max_radius: Option<Real>,
) -> Result<DialLayout> {
    if let Some(radius) = max_radius {
        if radius <= 0.0 {
            return Err(DialError::NonPositiveRadius(radius));
        }
    }

    let mut hour_lines = hour_lines.to_vec();
    if let Some(radius) = max_radius {
        clip_hour_lines(&mut hour_lines, radius);
    }

    let center = flip_y(sundial.center());

    // All surviving points, flipped once and for all.
    let points: Vec<Coord<Real>> = hour_lines
        .iter()
        .flat_map(|line| line.iter().map(|(_, p)| flip_y(p)))
        .collect();
    if points.is_empty() {
        return Err(DialError::EmptyDial);
    }

    let mut min_x = points[0].x;
    let mut min_y = points[0].y;
    let mut max_x = points[0].x;
    let mut max_y = points[0].y;
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    if let Some(radius) = max_radius {
        min_x = min_x.min(-radius);
        min_y = min_y.min(-radius);
        max_x = max_x.max(radius);
        max_y = max_y.max(radius);
    }

    // The legend spans an eighth of the scaled height.
    let font_size = (max_y - min_y) * SCALE_FACTOR / 8.0 / LEGEND_LINES;

    // Furthest surviving point on each hour line.
    let mut hour_marks = Vec::new();
    for line in &hour_lines {
        let mut furthest: Option<Point2<Real>> = None;
        for (_, point) in line.iter() {
            match furthest {
                Some(f) if point.coords.norm_squared() <= f.coords.norm_squared() => {},
                _ => furthest = Some(point),
            }
        }
        if let Some(point) = furthest {
            hour_marks.push(HourMark {
                at: flip_y(point),
                time_index: line.time_index(),
            });
        }
    }

    // With a bounding circle, the hour marks sit on the circle itself,
    // pushed outward from the dial center.
    if let Some(radius) = max_radius {
        for mark in &mut hour_marks {
            let pushed = push_onto_circle(to_point(mark.at), to_point(center), radius)?;
            mark.at = coord! { x: pushed.x, y: pushed.y };
        }
    }

    // Hour numbers sit offset from their mark, away from the origin;
    // the box has to grow to keep the text inside.
    let mut hour_labels = Vec::with_capacity(hour_marks.len());
    for mark in &hour_marks {
        let label = coord! {
            x: mark.at.x - 0.8 * font_size,
            y: mark.at.y + (1.3 * font_size).copysign(mark.at.y),
        };
        hour_labels.push(HourMark { at: label, time_index: mark.time_index });
        min_x = min_x.min(label.x);
        min_y = min_y.min(label.y);
        let digit_allowance = if mark.time_index >= 10 { 1.0 } else { 2.0 };
        max_x = max_x.max(mark.at.x + digit_allowance + 0.2 * font_size);
        max_y = max_y.max(mark.at.y + font_size + (1.3 * font_size).copysign(mark.at.y));
    }

    // Chain consecutive hour points per declination. Hour lines are
    // already time-ordered, no sorting involved.
    let mut declination_lines = Vec::new();
    for declination in declinations.iter() {
        let mut segments = Vec::new();
        let mut previous: Option<Coord<Real>> = None;
        for line in &hour_lines {
            let Some(point) = line.get(declination.degrees) else {
                continue;
            };
            let point = flip_y(point);
            if let Some(start) = previous {
                segments.push(Line::new(start, point));
            }
            previous = Some(point);
        }
        // With a bounding circle the curve runs from rim to rim: push
        // each end outward along its own last segment.
        if let Some(radius) = max_radius {
            if segments.is_empty() {
                // Possible with a small radius
                continue;
            }
            let first = segments[0];
            let entry = push_onto_circle(to_point(first.start), to_point(first.end), radius)?;
            segments.insert(0, Line::new(coord! { x: entry.x, y: entry.y }, first.start));
            let last = segments[segments.len() - 1];
            let exit = push_onto_circle(to_point(last.end), to_point(last.start), radius)?;
            segments.push(Line::new(last.end, coord! { x: exit.x, y: exit.y }));
        }
        declination_lines.push(DeclinationLine {
            label: declination.label.clone(),
            segments,
        });
    }

    // Final box: scale around the center to leave a margin.
    let width = max_x - min_x;
    let height = max_y - min_y;
    let width_scaled = width * SCALE_FACTOR;
    let height_scaled = height * SCALE_FACTOR;
    let x_offset = (width_scaled - width) / 2.0;
    let y_offset = (height_scaled - height) / 2.0;
    let bounds = Rect::new(
        coord! { x: min_x - x_offset, y: min_y - y_offset },
        coord! { x: max_x + x_offset, y: max_y + y_offset },
    );

    // Arrow head: 1% of the smallest dimension, square.
    let arrow_shape = (width.min(height) / 100.0, width.min(height) / 100.0);

    tracing::debug!(
        min_x,
        min_y,
        max_x,
        max_y,
        font_size,
        "dial layout bounds before margin"
    );

    Ok(DialLayout {
        bounds,
        width: width_scaled,
        height: height_scaled,
        font_size,
        arrow_shape,
        points,
        hour_marks,
        hour_labels,
        declination_lines,
        center,
        max_radius,
    })
}

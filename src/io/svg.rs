//! SVG rendering of a laid-out dial.
//!
//! Consumes a [`DialLayout`] read-only; all coordinate work (y-flip,
//! clipping, label placement) already happened in the layout pass, so
//! this module is pure drawing.

use svg::Document;
use svg::node::element::{Circle, Group, Line, Polygon, Text};

use crate::dial::Sundial;
use crate::float_types::Real;
use crate::layout::DialLayout;

/// Attribute formatting, four decimals throughout.
fn num(value: Real) -> String {
    format!("{value:.4}")
}

/// Build the SVG document for a laid-out dial.
///
/// `unit` is cosmetic: when non-empty it becomes the physical width
/// and height units of the drawing and shows up in the legend.
pub fn document(sundial: &Sundial, layout: &DialLayout, unit: &str) -> Document {
    let min = layout.bounds.min();
    let stroke = layout.arrow_shape.0 / 2.0;

    tracing::debug!(
        min_x = min.x,
        min_y = min.y,
        width = layout.width,
        height = layout.height,
        "svg viewbox"
    );

    let mut doc = Document::new().set(
        "viewBox",
        format!(
            "{} {} {} {}",
            num(min.x),
            num(min.y),
            num(layout.width),
            num(layout.height)
        ),
    );
    if !unit.is_empty() {
        doc = doc
            .set("width", format!("{}{}", num(layout.width), unit))
            .set("height", format!("{}{}", num(layout.height), unit));
    }

    if let Some(radius) = layout.max_radius {
        doc = doc.add(
            Circle::new()
                .set("cx", "0")
                .set("cy", "0")
                .set("r", num(radius))
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", num(stroke)),
        );
    }

    // Hour lines radiate from the dial center to the furthest point of
    // each hour.
    let mut hours = Group::new().set("stroke", "black").set("stroke-width", num(stroke));
    for mark in &layout.hour_marks {
        hours = hours.add(
            Line::new()
                .set("x1", num(layout.center.x))
                .set("y1", num(layout.center.y))
                .set("x2", num(mark.at.x))
                .set("y2", num(mark.at.y)),
        );
    }
    doc = doc.add(hours);

    // Declination curves.
    for declination_line in &layout.declination_lines {
        let mut group = Group::new()
            .set("data-declination", declination_line.label.clone())
            .set("stroke", "black")
            .set("stroke-width", num(stroke / 2.0));
        for segment in &declination_line.segments {
            group = group.add(
                Line::new()
                    .set("x1", num(segment.start.x))
                    .set("y1", num(segment.start.y))
                    .set("x2", num(segment.end.x))
                    .set("y2", num(segment.end.y)),
            );
        }
        doc = doc.add(group);
    }

    // Intersection dots.
    let mut dots = Group::new().set("fill", "black");
    for point in &layout.points {
        dots = dots.add(
            Circle::new()
                .set("cx", num(point.x))
                .set("cy", num(point.y))
                .set("r", num(stroke)),
        );
    }
    doc = doc.add(dots);

    // Hour numbers.
    let mut numbers = Group::new().set("font-size", num(layout.font_size));
    for label in &layout.hour_labels {
        numbers = numbers.add(
            Text::new(format!("{}", label.time_index))
                .set("x", num(label.at.x))
                .set("y", num(label.at.y)),
        );
    }
    doc = doc.add(numbers);

    doc = doc.add(legend(sundial, layout, unit));
    doc.add(x_axis_arrow(layout))
}

/// Five parameter lines in the top-left corner; their count is what
/// the layout derived the font size from.
fn legend(sundial: &Sundial, layout: &DialLayout, unit: &str) -> Group {
    let min = layout.bounds.min();
    let font = layout.font_size;
    let length_suffix = if unit.is_empty() { String::new() } else { format!(" {unit}") };
    let lines = [
        format!("Latitude: {:.4}", sundial.latitude()),
        format!("Longitude: {:.4}", sundial.longitude()),
        format!("Gnomonic declination: {:.4}", sundial.plane_declination()),
        format!("Stylus zenithal distance: {:.4}", sundial.zenithal_distance()),
        format!("Stylus length: {:.4}{length_suffix}", sundial.stylus_length()),
    ];
    let mut group = Group::new().set("font-size", num(font));
    for (index, line) in lines.iter().enumerate() {
        group = group.add(
            Text::new(line.clone())
                .set("x", num(min.x + font))
                .set("y", num(min.y + font * 1.2 * (index as Real + 1.0))),
        );
    }
    group
}

/// Small arrow in the bottom-left corner showing the positive x
/// direction of the dial coordinates.
fn x_axis_arrow(layout: &DialLayout) -> Group {
    let min = layout.bounds.min();
    let max = layout.bounds.max();
    let font = layout.font_size;
    let (arrow_length, arrow_width) = layout.arrow_shape;
    let start_x = min.x + font;
    let y = max.y - font;
    let end_x = start_x + 3.0 * font;
    let head = format!(
        "{},{} {},{} {},{}",
        num(end_x + arrow_length),
        num(y),
        num(end_x),
        num(y - arrow_width),
        num(end_x),
        num(y + arrow_width),
    );
    Group::new()
        .add(
            Line::new()
                .set("x1", num(start_x))
                .set("y1", num(y))
                .set("x2", num(end_x))
                .set("y2", num(y))
                .set("stroke", "black")
                .set("stroke-width", num(arrow_width / 2.0)),
        )
        .add(Polygon::new().set("points", head).set("fill", "black"))
        .add(
            Text::new("x")
                .set("x", num(end_x + 2.0 * arrow_length))
                .set("y", num(y + arrow_width))
                .set("font-size", num(font)),
        )
}

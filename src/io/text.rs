//! Plain-text rendering: the parameter header and the hour table.

use std::fmt::Write;

use crate::declination::DeclinationSet;
use crate::dial::Sundial;
use crate::float_types::{DEGREES_PER_HOUR, Real};
use crate::hour_lines::HourLine;

/// Render the parameter header followed by the 24-row coordinate
/// table, one column per reference declination. Declinations the sun
/// never reaches at a given hour show as `-`.
pub fn render(
    sundial: &Sundial,
    hour_lines: &[HourLine],
    declinations: &DeclinationSet,
) -> String {
    let mut out = String::new();
    let center = sundial.center();
    let _ = writeln!(out, "Sundial latitude (degrees): {:.4}", sundial.latitude());
    let _ = writeln!(out, "Sundial longitude (degrees): {:.4}", sundial.longitude());
    let _ = writeln!(
        out,
        "Sundial gnomonic declination (degrees): {:.4}",
        sundial.plane_declination()
    );
    let _ = writeln!(
        out,
        "Sundial stylus zenithal distance (degrees): {:.4}",
        sundial.zenithal_distance()
    );
    let _ = writeln!(out, "Sundial stylus length: {:.4}", sundial.stylus_length());
    let _ = writeln!(out, "Sundial center: ({:.4},{:.4})", center.x, center.y);
    let _ = writeln!(
        out,
        "Angle of the polar stylus with sundial plane (degrees): {:.4}",
        sundial.stylus_angle()
    );
    let _ = writeln!(
        out,
        "x-axis direction: positive towards {:.4} degrees compared to east",
        -sundial.plane_declination()
    );

    let mut header: Vec<String> = vec!["Angle".into(), "Time".into()];
    header.extend(declinations.iter().map(|d| d.label.clone()));

    let mut rows = Vec::with_capacity(hour_lines.len());
    for line in hour_lines {
        let mut row: Vec<String> = vec![
            format!("{}", (line.offset() as Real) * DEGREES_PER_HOUR),
            format!("{}", line.time_index()),
        ];
        row.extend(
            declinations
                .iter()
                .map(|d| coordinate_cell(line, d.degrees)),
        );
        rows.push(row);
    }

    out.push_str(&draw_table(&header, &rows));
    out
}

fn coordinate_cell(line: &HourLine, degrees: Real) -> String {
    match line.get(degrees) {
        Some(point) => format!("{:.4},{:.4}", point.x, point.y),
        None => "-".into(),
    }
}

/// Left-aligned bordered table, one space of padding per side.
fn draw_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.len());
        }
    }

    let rule: String = widths.iter().fold(String::from("+"), |mut acc, w| {
        acc.push_str(&"-".repeat(w + 2));
        acc.push('+');
        acc
    });

    let draw_row = |cells: &[String]| -> String {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(widths.iter().copied()) {
            let _ = write!(line, " {cell:<width$} |");
        }
        line
    };

    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", draw_row(header));
    let _ = writeln!(out, "{rule}");
    for row in rows {
        let _ = writeln!(out, "{}", draw_row(row));
    }
    let _ = writeln!(out, "{rule}");
    out
}

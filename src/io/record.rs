//! Flat interchange document for computed sundial geometry.
//!
//! A dial computed once can be persisted as JSON and fed back into
//! either presentation adapter. Keys mirror the placement parameter
//! names; hour line maps are keyed by the declination's display form.
//! The derived fields travel along for the benefit of non-Rust
//! consumers but are recomputed, not trusted, when reading back.

use std::collections::BTreeMap;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::declination::format_degrees;
use crate::dial::Sundial;
use crate::errors::{DialError, Result};
use crate::float_types::Real;
use crate::hour_lines::HourLine;

/// Serialized form of a computed dial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SundialRecord {
    pub phi: Real,
    pub longitude: Real,
    pub declination: Real,
    pub zenithal_distance: Real,
    pub stylus_length: Real,
    #[serde(rename = "P")]
    pub stylus_plane_sine: Real,
    pub center: (Real, Real),
    /// 24 hour line maps, midnight first, declination keys as strings.
    pub hour_lines: Vec<BTreeMap<String, (Real, Real)>>,
}

impl SundialRecord {
    pub fn new(sundial: &Sundial, hour_lines: &[HourLine]) -> Self {
        let maps = hour_lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|(degrees, point)| (format_degrees(degrees), (point.x, point.y)))
                    .collect()
            })
            .collect();
        Self {
            phi: sundial.latitude(),
            longitude: sundial.longitude(),
            declination: sundial.plane_declination(),
            zenithal_distance: sundial.zenithal_distance(),
            stylus_length: sundial.stylus_length(),
            stylus_plane_sine: sundial.stylus_plane_sine(),
            center: (sundial.center().x, sundial.center().y),
            hour_lines: maps,
        }
    }

    /// Rebuild the dial and its hour lines.
    pub fn into_parts(self) -> Result<(Sundial, Vec<HourLine>)> {
        let sundial = Sundial::new(
            self.phi,
            self.declination,
            self.zenithal_distance,
            self.stylus_length,
            self.longitude,
        )?;
        if self.hour_lines.len() != 24 {
            return Err(DialError::MalformedRecord(format!(
                "expected 24 hour lines, got {}",
                self.hour_lines.len()
            )));
        }
        let mut lines = Vec::with_capacity(self.hour_lines.len());
        for (index, map) in self.hour_lines.into_iter().enumerate() {
            let offset = index as i32 - 12;
            let mut points = Vec::with_capacity(map.len());
            for (key, (x, y)) in map {
                let degrees: Real = key.parse().map_err(|e| {
                    DialError::MalformedRecord(format!("bad declination key {key:?}: {e}"))
                })?;
                points.push((degrees, Point2::new(x, y)));
            }
            lines.push(HourLine::from_parts(offset, points));
        }
        Ok((sundial, lines))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

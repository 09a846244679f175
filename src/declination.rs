//! Reference solar declinations and their display labels.
//!
//! A sundial is drawn against a handful of fixed solar declinations:
//! the curve the shadow tip follows at a solstice, at the equinox, and
//! optionally at intermediate dates. The set is ordered; adapters
//! iterate it to keep table columns and legend entries stable.

use crate::errors::{DialError, Result};
use crate::float_types::{EPSILON, Real};

/// Solar declination at the solstices, in degrees.
pub const SOLSTICE_DEG: Real = 23.44;

/// One reference declination: its value in degrees and the label shown
/// in table headers and drawing legends.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDeclination {
    pub degrees: Real,
    pub label: String,
}

impl ReferenceDeclination {
    pub fn new(degrees: Real, label: impl Into<String>) -> Self {
        Self { degrees, label: label.into() }
    }

    /// An unnamed marker labelled by its own value.
    pub fn unnamed(degrees: Real) -> Self {
        Self { degrees, label: format_degrees(degrees) }
    }

    /// Key identifying this declination in the interchange record.
    pub fn key(&self) -> String {
        format_degrees(self.degrees)
    }
}

/// Display form of a declination value, shared between record keys and
/// default labels so both sides of a round trip agree.
pub(crate) fn format_degrees(degrees: Real) -> String {
    format!("{}", degrees)
}

/// Ordered set of reference declinations.
///
/// Any set must contain both solstices and the equinox; adapters rely
/// on those three marks being present even when the intermediate ones
/// are customized away.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclinationSet {
    entries: Vec<ReferenceDeclination>,
}

impl DeclinationSet {
    /// Build a set from custom entries, rejecting any that dropped a
    /// solstice or the equinox.
    pub fn new(entries: Vec<ReferenceDeclination>) -> Result<Self> {
        let set = Self { entries };
        for required in [-SOLSTICE_DEG, 0.0, SOLSTICE_DEG] {
            if !set.contains(required) {
                return Err(DialError::IncompleteDeclinations);
            }
        }
        Ok(set)
    }

    /// The canonical seven marks: solstices, equinox, and two
    /// intermediate dates on either side.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ReferenceDeclination::new(-SOLSTICE_DEG, "Winter Sol."),
                ReferenceDeclination::unnamed(-20.15),
                ReferenceDeclination::unnamed(-11.47),
                ReferenceDeclination::new(0.0, "Equinox"),
                ReferenceDeclination::unnamed(11.47),
                ReferenceDeclination::unnamed(20.15),
                ReferenceDeclination::new(SOLSTICE_DEG, "Summer Sol."),
            ],
        }
    }

    /// The minimal admissible set.
    pub fn solstices_and_equinox() -> Self {
        Self {
            entries: vec![
                ReferenceDeclination::new(-SOLSTICE_DEG, "Winter Sol."),
                ReferenceDeclination::new(0.0, "Equinox"),
                ReferenceDeclination::new(SOLSTICE_DEG, "Summer Sol."),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceDeclination> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, degrees: Real) -> bool {
        self.entries.iter().any(|e| (e.degrees - degrees).abs() < EPSILON)
    }

    /// Label of the entry at `degrees`, if the set has one.
    pub fn label_for(&self, degrees: Real) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| (e.degrees - degrees).abs() < EPSILON)
            .map(|e| e.label.as_str())
    }
}

impl Default for DeclinationSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_is_ordered_and_complete() {
        let set = DeclinationSet::standard();
        assert_eq!(set.len(), 7);
        let values: Vec<Real> = set.iter().map(|e| e.degrees).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(values, sorted);
        assert_eq!(set.label_for(0.0), Some("Equinox"));
        assert_eq!(set.label_for(-20.15), Some("-20.15"));
    }

    #[test]
    fn dropping_a_solstice_is_rejected() {
        let err = DeclinationSet::new(vec![
            ReferenceDeclination::new(0.0, "Equinox"),
            ReferenceDeclination::new(SOLSTICE_DEG, "Summer Sol."),
        ]);
        assert!(matches!(err, Err(DialError::IncompleteDeclinations)));
    }

    #[test]
    fn record_keys_use_shortest_float_form() {
        assert_eq!(ReferenceDeclination::unnamed(-23.44).key(), "-23.44");
        assert_eq!(ReferenceDeclination::unnamed(0.0).key(), "0");
    }
}

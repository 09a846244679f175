//! Dial computation errors

use crate::float_types::Real;

/// Result alias for fallible dial operations.
pub type Result<T> = std::result::Result<T, DialError>;

/// All the failure conditions that surface to callers.
///
/// Two conditions deliberately do *not* appear here: a stylus plane
/// angle of zero (the dial center falls back to the origin) and hours
/// the sun never reaches (the declination is simply absent from the
/// hour line). Both are ordinary geometry, not failures.
#[derive(Debug, thiserror::Error)]
pub enum DialError {
    /// (RadiusTooSmall) The bounding circle misses part of the dial geometry
    #[error("radius {radius} is too small, increase it")]
    RadiusTooSmall { radius: Real },
    /// (NonPositiveRadius) A bounding radius must be strictly positive
    #[error("maximum radius must be strictly positive, got {0}")]
    NonPositiveRadius(Real),
    /// (NonPositiveStylusLength) The stylus length must be strictly positive
    #[error("stylus length must be strictly positive, got {0}")]
    NonPositiveStylusLength(Real),
    /// (EmptyDial) No point survived clipping, there is nothing to lay out
    #[error("no dial point within bounds, nothing to draw")]
    EmptyDial,
    /// (IncompleteDeclinations) A declination set must keep the solstices and the equinox
    #[error("declination set is missing a solstice or the equinox")]
    IncompleteDeclinations,
    /// (MalformedRecord) An interchange record field could not be decoded
    #[error("malformed sundial record: {0}")]
    MalformedRecord(String),
    /// Error bubbled up from `serde_json` while reading or writing a record.
    #[error("could not decode record JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Record I/O failed at the filesystem level.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

//! Planar **sundial** geometry: given a dial's placement on Earth and
//! the stylus that casts the shadow, compute the hour lines crossed
//! with a set of reference solar declinations, then render the result
//! as a plain-text table or an SVG drawing.
//!
//! ```
//! use gnomon::{DeclinationSet, Sundial};
//!
//! let dial = Sundial::new(48.8, 10.0, 55.0, 15.0, 2.3)?;
//! let hour_lines = dial.compute_hour_lines(&DeclinationSet::standard());
//! assert_eq!(hour_lines.len(), 24);
//! # Ok::<(), gnomon::DialError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: SVG rendering of a laid-out dial (and the `gnomon`
//!   binary, which needs it)
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod circle;
pub mod declination;
pub mod dial;
pub mod errors;
pub mod float_types;
pub mod hour_lines;
pub mod io;
pub mod layout;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use declination::{DeclinationSet, ReferenceDeclination};
pub use dial::Sundial;
pub use errors::DialError;
pub use hour_lines::HourLine;
pub use layout::DialLayout;

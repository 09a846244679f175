//! Format adapters consuming the computed geometry.
//!
//! Every adapter reads the core's data model and never feeds anything
//! back into it; geometry can be computed once, persisted as a
//! [`record::SundialRecord`], and rendered later.

pub mod record;
pub mod text;

#[cfg(feature = "svg-io")]
pub mod svg;

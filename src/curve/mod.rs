//! Curve storage primitives.
//!
//! A [`Curve`] is an ordered sequence of identified points tagged with its
//! curve type; [`merge`] holds the reconciliation step applied when a stage
//! re-supplies a curve that is already stored.

pub mod curve;
pub mod merge;

pub use curve::*;

//! Crate error type.
//!
//! Only construction-time validation can fail here. Missing or insufficient
//! data is always reported as an absent value, never as an error, so callers
//! branch on `Option` rather than matching error variants.

use thiserror::Error;

/// Validation failures raised while constructing value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A coefficient vector longer than the supported term count.
    #[error("coefficient vector has {0} terms, at most 10 are supported")]
    TooManyCoefficients(usize),

    /// A per-term access outside the supported degree range.
    #[error("coefficient degree {0} is outside the supported range 0..=9")]
    DegreeOutOfRange(usize),
}

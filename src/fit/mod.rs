//! Pump performance fitting.
//!
//! Responsibilities:
//!
//! - select the samples that actually carry each attribute
//! - synthesize the zero-flow point when the sampled range starts too far right
//! - fit one polynomial coefficient vector per attribute

pub mod pump;

pub use pump::*;

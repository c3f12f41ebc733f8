//! Parameter-swept curve families.
//!
//! A curve set groups the curves produced by sweeping a single parameter:
//! operating frequency for sensitivity ("tornado") sweeps, gas-liquid ratio
//! for pressure families. Sets are built fresh and replace their predecessor
//! wholesale; members are never merged.

pub mod builder;

pub use builder::*;

//! Analysis curve engine for artificial-lift well reports.
//!
//! An analysis run stores, reconciles, and groups the engineering curves it
//! computes (pump performance, operating envelopes, sensitivity sweeps,
//! pressure families), and fits raw pump samples into polynomial coefficient
//! vectors for later evaluation. This crate is the in-memory core only:
//!
//! - calculation stages push coordinate lists into an [`store::AnalysisOutput`]
//! - swept curve families are grouped by the [`sets`] builder
//! - raw pump samples are fitted by [`fit::fit_pump_performance`]
//!
//! Persistence, transport encodings, chart rendering, and the physics that
//! produces the coordinates all live in outer layers.

pub mod curve;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod report;
pub mod sets;
pub mod store;

//! Numerical routines backing the fitter.

pub mod poly;

pub use poly::*;

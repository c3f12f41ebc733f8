//! Plain-text summaries of an analysis output.

pub mod format;

pub use format::*;

//! Data layer for the backoff filter.
//!
//! Responsible for discovering and opening simulation log input, classifying
//! lines, accumulating per-manager backoff times and running the single-pass
//! scan that produces the final report.

pub mod accumulator;
pub mod classifier;
pub mod pipeline;
pub mod reader;

pub use filter_core as core;

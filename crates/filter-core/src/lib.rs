//! Core domain layer for the backoff filter.
//!
//! Defines the manager-line format, the report model, the error taxonomy,
//! summary formatting and the CLI settings shared by the data and binary
//! crates.

pub mod error;
pub mod formatting;
pub mod line_format;
pub mod models;
pub mod settings;

pub use error::{FilterError, Result};

//! Per-line and whole-text statistics for a plain text file.
//!
//! [`source`] loads a file into a [`Document`], [`analyzer`] computes a
//! [`Report`] from it, and [`report`] prints that report.

pub mod analyzer;
pub mod config;
pub mod error;
mod logging;
pub mod report;
pub mod source;

pub use analyzer::{Document, LineValue, Report, analyze};
pub use config::Config;
pub use error::FileReadError;

//! Output formatting.
//!
//! - [`console::ConsoleFormatter`]: colored, human-readable text
//! - [`json::JsonFormatter`]: JSON built from the [`views`]

pub mod console;
pub mod formatter;
pub mod json;
pub mod views;

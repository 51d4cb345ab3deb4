//! Statistics Documents
//!
//! Turns a [`SimulationStatistics`] snapshot into the document handed to the
//! user. The default output is a small XML tree; an output path ending in
//! `.json` gets the same statistics as JSON instead.
//!
//! SimulationStatistics
//! statistics_document
//! Element tree
//! to_xml_string
//! output file
//!

mod element;
mod error;
mod number;
mod render;

pub use element::*;
pub use error::*;
pub use number::format_decimal;
pub use render::statistics_document;

use crate::simlog::SimulationStatistics;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xml,
    Json,
}

impl OutputFormat {
    /// Picks the format from the output file extension. Anything that is not
    /// `.json` (case-insensitive) is XML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Xml,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xml => f.write_str("XML"),
            OutputFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Serializes the statistics in the requested format.
pub fn render_statistics(
    stats: &SimulationStatistics,
    format: OutputFormat,
) -> Result<String, DocumentError> {
    match format {
        OutputFormat::Xml => Ok(statistics_document(stats).to_xml_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
    }
}

pub fn write_document(path: &Path, contents: &str) -> Result<(), DocumentError> {
    fs::write(path, contents).map_err(|source| DocumentError::write(path, source))
}

//! Export functionality for extracted edge lists.
//!
//! Edges can be written as JSON (the record shape downstream renderers
//! consume) or as CSV for spreadsheets.

pub mod csv;
pub mod json;

use crate::graph::Edge;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    #[default]
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the edges to the given writer.
    fn export<W: Write>(&self, edges: &[Edge], writer: &mut W) -> io::Result<()>;
}

/// Export edges in the specified format.
pub fn export<W: Write>(format: ExportFormat, edges: &[Edge], writer: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(edges, writer),
        ExportFormat::Csv => csv::CsvExporter.export(edges, writer),
    }
}

/// Export edges to a string.
pub fn export_to_string(format: ExportFormat, edges: &[Edge]) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, edges, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) fn sample_edges() -> Vec<Edge> {
    use std::path::PathBuf;

    vec![
        Edge {
            source: "lib".to_string(),
            source_folder: PathBuf::from("/ws/lib"),
            target: "app".to_string(),
            target_folder: PathBuf::from("/ws/app"),
            curr_version: "^1.0.0".to_string(),
            next_version: "1.2.0".to_string(),
            dev: Some(false),
        },
        Edge {
            source: "utils".to_string(),
            source_folder: PathBuf::from("/ws/app/node_modules/utils"),
            target: "app".to_string(),
            target_folder: PathBuf::from("/ws/app"),
            curr_version: "1.1.0".to_string(),
            next_version: "2.0.0".to_string(),
            dev: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("markdown".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Csv), "csv");
    }

    #[test]
    fn test_export_to_string_dispatches() {
        let edges = sample_edges();
        let csv = export_to_string(ExportFormat::Csv, &edges).unwrap();
        assert!(csv.starts_with("source,"));

        let json = export_to_string(ExportFormat::Json, &edges).unwrap();
        assert!(json.trim_start().starts_with('['));
    }
}

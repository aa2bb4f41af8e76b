//! CSV export implementation.
//!
//! Exports edge lists in CSV format for spreadsheet use.

use super::Exporter;
use crate::graph::Edge;
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, edges: &[Edge], writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "source,source_folder,target,target_folder,curr_version,next_version,dev"
        )?;

        for edge in edges {
            // Deduped edges leave `dev` empty.
            let dev = edge.dev.map(|d| d.to_string()).unwrap_or_default();

            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                Self::escape_field(&edge.source),
                Self::escape_field(&edge.source_folder.to_string_lossy()),
                Self::escape_field(&edge.target),
                Self::escape_field(&edge.target_folder.to_string_lossy()),
                Self::escape_field(&edge.curr_version),
                Self::escape_field(&edge.next_version),
                dev
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_edges;

    #[test]
    fn test_csv_export_basic() {
        let mut output = Vec::new();
        CsvExporter.export(&sample_edges(), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "source,source_folder,target,target_folder,curr_version,next_version,dev"
        );
        assert_eq!(lines[1], "lib,/ws/lib,app,/ws/app,^1.0.0,1.2.0,false");
        assert_eq!(
            lines[2],
            "utils,/ws/app/node_modules/utils,app,/ws/app,1.1.0,2.0.0,"
        );
    }

    #[test]
    fn test_csv_escape_field() {
        assert_eq!(CsvExporter::escape_field("simple"), "simple");
        assert_eq!(CsvExporter::escape_field("has,comma"), "\"has,comma\"");
        assert_eq!(
            CsvExporter::escape_field("has\"quote"),
            "\"has\"\"quote\""
        );
    }

    #[test]
    fn test_csv_export_range_with_comma() {
        let mut edges = sample_edges();
        edges[0].curr_version = ">=1.0.0, <2.0.0".to_string();

        let mut output = Vec::new();
        CsvExporter.export(&edges, &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        assert!(csv_str.contains("\">=1.0.0, <2.0.0\""));
    }
}

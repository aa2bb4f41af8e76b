//! JSON export implementation.
//!
//! Writes the edge list as a pretty-printed JSON array of edge records.

use super::Exporter;
use crate::graph::Edge;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, edges: &[Edge], writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(edges)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

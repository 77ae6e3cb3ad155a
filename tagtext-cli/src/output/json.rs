//! JSON output formatter

use super::SegmentFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tagtext_core::{Rendered, Segment, SegmentStats};

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file, absent for `--text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Segments in order
    pub segments: Vec<Segment>,
    /// Segment counts
    pub stats: SegmentStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> SegmentFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: Option<&str>, rendered: &Rendered) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.map(str::to_string),
            segments: rendered.segments.clone(),
            stats: rendered.stats,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

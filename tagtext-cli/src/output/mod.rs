//! Output formatting for rendered segments

use anyhow::Result;
use tagtext_core::Rendered;

/// Writes rendered documents in one output format
pub trait SegmentFormatter: Send {
    /// Format one rendered document; `source` names the input file, if any
    fn format_document(&mut self, source: Option<&str>, rendered: &Rendered) -> Result<()>;

    /// Flush anything buffered
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

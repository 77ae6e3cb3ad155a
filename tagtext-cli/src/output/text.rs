//! Plain text output formatter

use super::SegmentFormatter;
use anyhow::Result;
use std::io::{self, Write};
use tagtext_core::press::press_message;
use tagtext_core::{PressAction, Rendered};

/// Text formatter - one segment per line: index, kind, quoted text, action
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Formatter writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> SegmentFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: Option<&str>, rendered: &Rendered) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "==> {source} <==")?;
        }

        for (i, segment) in rendered.segments.iter().enumerate() {
            write!(
                self.writer,
                "{i:>4}  {:<8} {:?}",
                segment.kind.as_str(),
                segment.text
            )?;
            match &segment.action {
                Some(PressAction::OpenLink { url }) => write!(self.writer, "  -> open {url}")?,
                Some(action) => {
                    if let Some(message) = press_message(action) {
                        write!(self.writer, "  -> {message}")?;
                    }
                }
                None => {}
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

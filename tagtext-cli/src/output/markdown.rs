//! Markdown output formatter

use super::SegmentFormatter;
use anyhow::Result;
use std::io::Write;
use tagtext_core::{Rendered, Segment, SegmentKind};

/// Markdown formatter - inline rendering followed by a numbered list of
/// pressable segments
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    pressable_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pressable_count: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn inline(segment: &Segment) -> String {
        if segment.text.is_empty() {
            return String::new();
        }
        match segment.kind {
            SegmentKind::Link => format!("[{0}]({0})", segment.text),
            SegmentKind::Hashtag | SegmentKind::Mention => format!("**{}**", segment.text),
            SegmentKind::Prop => format!("`{}`", segment.text),
            SegmentKind::Emoji | SegmentKind::Plain => segment.text.clone(),
        }
    }
}

impl<W: Write + Send> SegmentFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: Option<&str>, rendered: &Rendered) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }

        let inline: String = rendered.segments.iter().map(Self::inline).collect();
        writeln!(self.writer, "{}", inline.trim_end())?;
        writeln!(self.writer)?;

        for segment in rendered.segments.iter().filter(|s| s.is_pressable()) {
            self.pressable_count += 1;
            writeln!(
                self.writer,
                "{}. {}: `{}`",
                self.pressable_count, segment.kind, segment.text
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total pressable segments: {}*",
            self.pressable_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagtext_core::{RenderRequest, Segmenter};

    #[test]
    fn test_markdown_output() {
        let segmenter = Segmenter::new().unwrap();
        let rendered = segmenter
            .render(RenderRequest::new("see http://t.co #rust ?id"))
            .unwrap();

        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_document(None, &rendered).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(out.starts_with("see [http://t.co](http://t.co) **#rust** `?id`\n"));
        assert!(out.contains("1. link: `http://t.co`"));
        assert!(out.contains("2. hashtag: `#rust`"));
        assert!(out.contains("3. prop: `?id`"));
        assert!(out.ends_with("---\n*Total pressable segments: 3*\n"));
    }
}

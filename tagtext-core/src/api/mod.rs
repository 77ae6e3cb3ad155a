//! Input types and one-shot entry points

mod input;

pub use input::Input;

use crate::application::Segmenter;
use crate::domain::{ExtractOptions, Segment};
use crate::error::Result;

/// Segment `text` with a default segmenter
///
/// Builds a fresh [`Segmenter`] per call. Hold on to a segmenter when
/// rendering many texts.
pub fn render_text(text: &str) -> Result<Vec<Segment>> {
    render_text_with(text, &ExtractOptions::default())
}

/// Segment `text` with a default segmenter and custom options
pub fn render_text_with(text: &str, options: &ExtractOptions) -> Result<Vec<Segment>> {
    let segmenter = Segmenter::new()?;
    Ok(segmenter.segment_with(text, options))
}

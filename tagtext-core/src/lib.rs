//! Tagtext: split social text into styled, pressable segments
//!
//! Input text is split on whitespace runs. Each word is claimed by the first
//! matching recognizer in a fixed chain (link, prop, hashtag, mention, emoji)
//! and falls back to plain text otherwise. Concatenating the segment texts
//! always reproduces the input.
//!
//! ```
//! use tagtext_core::{render_text, SegmentKind};
//!
//! let segments = render_text("hello #rust").unwrap();
//! assert_eq!(segments[2].kind, SegmentKind::Hashtag);
//! assert_eq!(segments[2].text, "#rust");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod application;
pub mod collaborators;
pub mod domain;
pub mod error;
pub mod press;

pub use api::{render_text, render_text_with, Input};
pub use application::{
    PressConfig, RenderConfig, RenderRequest, Rendered, SegmentStats, Segmenter,
    SegmenterBuilder,
};
pub use collaborators::{
    Entity, EntityExtractor, LinkTester, TwitterEntityExtractor, UrlLinkTester,
};
pub use domain::{
    join_segments, Classification, ClassifyContext, ExtractOptions, PressAction, Recognized,
    Recognizer, Segment, SegmentKind, Style, StyleSheet, Token, DEFAULT_EMOJI_FONT,
    DEFAULT_LINK_COLOR,
};
pub use error::{Result, TagTextError};
pub use press::{DefaultPressHandler, NotifierKind, PressHandler};

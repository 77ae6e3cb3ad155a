//! Domain types and the per-token recognizers
//!
//! Everything here is pure: no I/O, no shared mutable state.

pub mod emoji;
pub mod options;
pub mod recognizers;
pub mod sanitize;
pub mod segment;
pub mod token;

pub use options::ExtractOptions;
pub use recognizers::{
    Classification, ClassifyContext, EmojiRecognizer, HashtagRecognizer, LinkRecognizer,
    MentionRecognizer, PropRecognizer, Recognized, Recognizer,
};
pub use sanitize::sanitize;
pub use segment::{
    join_segments, PressAction, Segment, SegmentKind, Style, StyleSheet, DEFAULT_EMOJI_FONT,
    DEFAULT_LINK_COLOR,
};
pub use token::{is_split_whitespace, join_tokens, split_words, Token, TokenKind};

//! Segments handed to the rendering surface

use crate::error::{Result, TagTextError};
use crate::press::PressHandler;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default color for pressable segments
pub const DEFAULT_LINK_COLOR: &str = "#2980b9";

/// Default font-family hint for emoji segments
pub const DEFAULT_EMOJI_FONT: &str = "emoji";

/// Category of a rendered segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Unclassified text, whitespace and remainders
    Plain,
    /// Hyperlink
    Link,
    /// `?identifier` marker
    Prop,
    /// `#hashtag`
    Hashtag,
    /// `@mention`
    Mention,
    /// Emoji run
    Emoji,
}

impl SegmentKind {
    /// All kinds in classification priority order, fallback last
    pub const ALL: [SegmentKind; 6] = [
        SegmentKind::Link,
        SegmentKind::Prop,
        SegmentKind::Hashtag,
        SegmentKind::Mention,
        SegmentKind::Emoji,
        SegmentKind::Plain,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Plain => "plain",
            SegmentKind::Link => "link",
            SegmentKind::Prop => "prop",
            SegmentKind::Hashtag => "hashtag",
            SegmentKind::Mention => "mention",
            SegmentKind::Emoji => "emoji",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            SegmentKind::Plain => "text that matched no recognizer",
            SegmentKind::Link => "URL, e-mail address or bare domain",
            SegmentKind::Prop => "?identifier marker",
            SegmentKind::Hashtag => "#hashtag",
            SegmentKind::Mention => "@mention",
            SegmentKind::Emoji => "emoji sequence",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload a press callback is bound with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PressAction {
    /// Open a hyperlink
    OpenLink {
        /// Link text as written
        url: String,
    },
    /// Hashtag pressed
    Hashtag {
        /// Matched text including the sigil
        text: String,
    },
    /// Mention pressed
    Mention {
        /// Matched text including the sigil
        text: String,
        /// Position of the source token in the split sequence
        index: usize,
    },
    /// Prop pressed
    Prop {
        /// Matched text including the `?`
        text: String,
        /// Position of the source token in the split sequence
        index: usize,
    },
}

/// Presentation hints for a segment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Text color as `#rgb` or `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Alternate font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl Style {
    /// Style with only a color
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            font_family: None,
        }
    }

    /// Style with only a font family
    pub fn font_family(family: impl Into<String>) -> Self {
        Self {
            color: None,
            font_family: Some(family.into()),
        }
    }

    /// Check that the values are usable by a renderer
    pub fn validate(&self, target: &str) -> Result<()> {
        if let Some(color) = &self.color {
            if !is_hex_color(color) {
                return Err(TagTextError::InvalidStyle {
                    target: target.to_string(),
                    reason: format!("color {color:?} is not #rgb or #rrggbb"),
                });
            }
        }
        if let Some(family) = &self.font_family {
            if family.trim().is_empty() {
                return Err(TagTextError::InvalidStyle {
                    target: target.to_string(),
                    reason: "font family is empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Style per segment kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// Link style
    pub link: Style,
    /// Hashtag style
    pub hashtag: Style,
    /// Mention style
    pub mention: Style,
    /// Prop style
    pub prop: Style,
    /// Emoji style
    pub emoji: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            link: Style::color(DEFAULT_LINK_COLOR),
            hashtag: Style::color(DEFAULT_LINK_COLOR),
            mention: Style::color(DEFAULT_LINK_COLOR),
            prop: Style::color(DEFAULT_LINK_COLOR),
            emoji: Style::font_family(DEFAULT_EMOJI_FONT),
        }
    }
}

impl StyleSheet {
    /// Style applied to matched segments of `kind`; plain text is unstyled
    pub fn for_kind(&self, kind: SegmentKind) -> Option<&Style> {
        match kind {
            SegmentKind::Plain => None,
            SegmentKind::Link => Some(&self.link),
            SegmentKind::Prop => Some(&self.prop),
            SegmentKind::Hashtag => Some(&self.hashtag),
            SegmentKind::Mention => Some(&self.mention),
            SegmentKind::Emoji => Some(&self.emoji),
        }
    }

    /// Validate every style slot
    pub fn validate(&self) -> Result<()> {
        self.link.validate("link")?;
        self.hashtag.validate("hashtag")?;
        self.mention.validate("mention")?;
        self.prop.validate("prop")?;
        self.emoji.validate("emoji")
    }
}

/// A classified, renderable run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Text to render
    pub text: String,
    /// Category
    pub kind: SegmentKind,
    /// Index of the source token
    pub token_index: usize,
    /// Action dispatched when the segment is pressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<PressAction>,
    /// Presentation hints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl Segment {
    /// Unstyled, non-pressable segment
    pub fn plain(text: impl Into<String>, token_index: usize) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Plain,
            token_index,
            action: None,
            style: None,
        }
    }

    /// Whether pressing this segment does anything
    pub fn is_pressable(&self) -> bool {
        self.action.is_some()
    }

    /// Dispatch this segment's action to `handler`
    ///
    /// Returns `false` when the segment carries no action.
    pub fn press(&self, handler: &dyn PressHandler) -> bool {
        match &self.action {
            Some(action) => {
                handler.on_press(action);
                true
            }
            None => false,
        }
    }
}

/// Concatenate segment text in order
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

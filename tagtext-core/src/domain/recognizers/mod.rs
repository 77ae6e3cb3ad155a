//! Per-token recognizers
//!
//! A [`Recognizer`] looks at one word token and either claims a prefix of it
//! or declines. The segmenter runs them in a fixed priority order and stops
//! at the first claim.

mod emoji;
mod hashtag;
mod link;
mod mention;
mod prop;

pub use emoji::EmojiRecognizer;
pub use hashtag::HashtagRecognizer;
pub use link::LinkRecognizer;
pub use mention::MentionRecognizer;
pub use prop::PropRecognizer;

use crate::collaborators::Entity;
use crate::domain::options::ExtractOptions;
use crate::domain::segment::SegmentKind;
use crate::domain::token::Token;

/// Result of classifying one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Hyperlink
    Link {
        /// Link as written
        url: String,
    },
    /// `?identifier`
    Prop {
        /// Identifier without the `?`
        name: String,
    },
    /// `#hashtag`
    Hashtag {
        /// Tag without the sigil
        tag: String,
    },
    /// `@mention`
    Mention {
        /// Handle without the sigil
        handle: String,
    },
    /// Emoji run
    Emoji,
    /// Nothing matched
    Plain,
}

impl Classification {
    /// Segment kind for this classification
    pub fn kind(&self) -> SegmentKind {
        match self {
            Classification::Link { .. } => SegmentKind::Link,
            Classification::Prop { .. } => SegmentKind::Prop,
            Classification::Hashtag { .. } => SegmentKind::Hashtag,
            Classification::Mention { .. } => SegmentKind::Mention,
            Classification::Emoji => SegmentKind::Emoji,
            Classification::Plain => SegmentKind::Plain,
        }
    }

    /// Whether the token is split into a matched and a remainder segment
    pub fn splits_remainder(&self) -> bool {
        matches!(
            self,
            Classification::Prop { .. }
                | Classification::Hashtag { .. }
                | Classification::Mention { .. }
        )
    }
}

/// A recognizer's claim on a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognized {
    /// What the token is
    pub classification: Classification,
    /// Byte length of the matched prefix; the rest is the remainder
    pub matched_len: usize,
}

impl Recognized {
    /// Claim the whole token
    pub fn whole(classification: Classification, token: &Token<'_>) -> Self {
        Self {
            classification,
            matched_len: token.text.len(),
        }
    }
}

/// Shared, read-only state for one render
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    /// Extraction switches for this render
    pub options: &'a ExtractOptions,
    /// The full sanitized input
    pub text: &'a str,
}

/// A single stage of the classifier chain
pub trait Recognizer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this stage runs under `options`
    fn enabled(&self, _options: &ExtractOptions) -> bool {
        true
    }

    /// Claim a prefix of `token`, or decline with `None`
    fn try_classify(&self, token: &Token<'_>, ctx: &ClassifyContext<'_>) -> Option<Recognized>;
}

/// Validate that an extracted entity sits at the very start of `token`
///
/// The entity must begin at offset 0 with one of `sigils`, and its text must
/// directly follow the sigil. Returns the matched byte length.
pub(crate) fn anchored_entity(token: &str, entity: &Entity, sigils: &[char]) -> Option<usize> {
    if entity.text.is_empty() || entity.start != 0 || entity.end > token.len() {
        return None;
    }
    let matched = token.get(..entity.end)?;
    let mut chars = matched.chars();
    let sigil = chars.next()?;
    if !sigils.contains(&sigil) || chars.as_str() != entity.text {
        return None;
    }
    Some(entity.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_entity_accepts_leading_sigil() {
        let entity = Entity::new("world", 0, 6);
        assert_eq!(anchored_entity("#world!", &entity, &['#']), Some(6));
    }

    #[test]
    fn test_anchored_entity_rejects_offset_match() {
        let entity = Entity::new("foo", 1, 5);
        assert_eq!(anchored_entity("(#foo)", &entity, &['#']), None);
    }

    #[test]
    fn test_anchored_entity_rejects_inconsistent_spans() {
        assert_eq!(anchored_entity("#abc", &Entity::new("", 0, 1), &['#']), None);
        assert_eq!(anchored_entity("#abc", &Entity::new("abc", 0, 9), &['#']), None);
        assert_eq!(anchored_entity("#abc", &Entity::new("xyz", 0, 4), &['#']), None);
        assert_eq!(anchored_entity("@abc", &Entity::new("abc", 0, 4), &['#']), None);
    }

    #[test]
    fn test_anchored_entity_multibyte_sigil() {
        let token = "＃tag";
        let entity = Entity::new("tag", 0, token.len());
        assert_eq!(anchored_entity(token, &entity, &['#', '＃']), Some(token.len()));
    }

    #[test]
    fn test_classification_split_rules() {
        assert!(Classification::Prop { name: "x".into() }.splits_remainder());
        assert!(Classification::Hashtag { tag: "x".into() }.splits_remainder());
        assert!(Classification::Mention { handle: "x".into() }.splits_remainder());
        assert!(!Classification::Link { url: "x".into() }.splits_remainder());
        assert!(!Classification::Emoji.splits_remainder());
        assert!(!Classification::Plain.splits_remainder());
    }
}

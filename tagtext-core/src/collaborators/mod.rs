//! Collaborators the recognizers delegate to
//!
//! The pipeline only sees the traits; the default implementations are
//! regex based and compiled once when a segmenter is built.

mod link_tester;
mod twitter;

pub use link_tester::UrlLinkTester;
pub use twitter::TwitterEntityExtractor;

/// Whole-token hyperlink detection
pub trait LinkTester: Send + Sync {
    /// Whether `token` is exactly one link
    fn is_link(&self, token: &str) -> bool;
}

/// An entity found by an [`EntityExtractor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity text without its sigil
    pub text: String,
    /// Byte offset of the sigil
    pub start: usize,
    /// Byte offset one past the entity
    pub end: usize,
}

impl Entity {
    /// Create an entity spanning `start..end`
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Hashtag and mention extraction
///
/// Implementations must be total: "nothing found" is an empty vector.
pub trait EntityExtractor: Send + Sync {
    /// Hashtags in `text`, in order of appearance
    fn extract_hashtags(&self, text: &str) -> Vec<Entity>;

    /// Mentions in `text`, in order of appearance
    fn extract_mentions(&self, text: &str) -> Vec<Entity>;
}

//! Per-render extraction switches

use serde::{Deserialize, Serialize};

/// Which recognizers run for a render
///
/// Every switch defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Recognize hyperlinks
    pub links: bool,
    /// Recognize `#hashtags`
    pub hashtags: bool,
    /// Recognize `@mentions`
    pub mentions: bool,
    /// Recognize `?props`
    pub props: bool,
    /// Recognize emoji tokens
    pub emoji: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl ExtractOptions {
    /// Every recognizer enabled
    pub const fn all() -> Self {
        Self {
            links: true,
            hashtags: true,
            mentions: true,
            props: true,
            emoji: true,
        }
    }

    /// Every recognizer disabled; everything renders as plain text
    pub const fn none() -> Self {
        Self {
            links: false,
            hashtags: false,
            mentions: false,
            props: false,
            emoji: false,
        }
    }

    /// Set link extraction
    pub fn links(mut self, enabled: bool) -> Self {
        self.links = enabled;
        self
    }

    /// Set hashtag extraction
    pub fn hashtags(mut self, enabled: bool) -> Self {
        self.hashtags = enabled;
        self
    }

    /// Set mention extraction
    pub fn mentions(mut self, enabled: bool) -> Self {
        self.mentions = enabled;
        self
    }

    /// Set prop extraction
    pub fn props(mut self, enabled: bool) -> Self {
        self.props = enabled;
        self
    }

    /// Set emoji extraction
    pub fn emoji(mut self, enabled: bool) -> Self {
        self.emoji = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options: ExtractOptions = toml::from_str("hashtags = false").unwrap();
        assert!(!options.hashtags);
        assert!(options.links && options.mentions && options.props && options.emoji);
    }

    #[test]
    fn test_builder_methods() {
        let options = ExtractOptions::none().links(true).emoji(true);
        assert!(options.links);
        assert!(options.emoji);
        assert!(!options.hashtags);
    }
}

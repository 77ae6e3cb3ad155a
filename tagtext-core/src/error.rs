//! Error types for segment rendering

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised at the pipeline boundary
///
/// Classification itself never fails; every error here comes from reading
/// input, loading configuration or initialising a collaborator.
#[derive(Error, Debug)]
pub enum TagTextError {
    /// I/O error while reading input or configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration file could not be parsed
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Style value rejected during validation
    #[error("invalid style for {target}: {reason}")]
    InvalidStyle {
        /// Which style slot was invalid (e.g. "hashtag")
        target: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A collaborator (link tester, entity extractor, recognizer) failed to initialise
    #[error("failed to initialise {name}: {reason}")]
    Collaborator {
        /// Collaborator name
        name: &'static str,
        /// Underlying failure
        reason: String,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl TagTextError {
    pub(crate) fn collaborator(name: &'static str, err: regex::Error) -> Self {
        TagTextError::Collaborator {
            name,
            reason: err.to_string(),
        }
    }
}

/// Result type for tagtext operations
pub type Result<T> = std::result::Result<T, TagTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_style_display() {
        let error = TagTextError::InvalidStyle {
            target: "hashtag".to_string(),
            reason: "color must start with '#'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid style for hashtag: color must start with '#'"
        );
    }

    #[test]
    fn test_collaborator_from_regex_error() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error = TagTextError::collaborator("link tester", regex_err);
        assert!(error.to_string().starts_with("failed to initialise link tester:"));
    }

    #[test]
    fn test_serde_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: TagTextError = json_err.into();
        assert!(error.to_string().starts_with("serialization error:"));
    }

    #[test]
    fn test_utf8_conversion() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error: TagTextError = utf8_err.into();
        assert!(matches!(error, TagTextError::Utf8(_)));
    }
}

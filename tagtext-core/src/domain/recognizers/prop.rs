use super::{Classification, ClassifyContext, Recognized, Recognizer};
use crate::domain::options::ExtractOptions;
use crate::domain::token::Token;
use crate::error::{Result, TagTextError};
use regex::Regex;

/// `?identifier` at the start of a token
///
/// Identifier characters are ASCII letters, digits and `_`. Anything after the
/// identifier is left as the remainder.
#[derive(Debug)]
pub struct PropRecognizer {
    pattern: Regex,
}

impl PropRecognizer {
    /// Compile the prop pattern
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"^\?[A-Za-z0-9_]+")
            .map_err(|e| TagTextError::collaborator("prop recognizer", e))?;
        Ok(Self { pattern })
    }
}

impl Recognizer for PropRecognizer {
    fn name(&self) -> &'static str {
        "prop"
    }

    fn enabled(&self, options: &ExtractOptions) -> bool {
        options.props
    }

    fn try_classify(&self, token: &Token<'_>, _ctx: &ClassifyContext<'_>) -> Option<Recognized> {
        let found = self.pattern.find(token.text)?;
        Some(Recognized {
            classification: Classification::Prop {
                name: found.as_str()[1..].to_string(),
            },
            matched_len: found.end(),
        })
    }
}

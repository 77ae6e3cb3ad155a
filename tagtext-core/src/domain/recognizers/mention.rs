use super::{anchored_entity, Classification, ClassifyContext, Recognized, Recognizer};
use crate::collaborators::EntityExtractor;
use crate::domain::options::ExtractOptions;
use crate::domain::token::Token;
use std::sync::Arc;

const MENTION_SIGILS: [char; 2] = ['@', '＠'];

/// First mention of a token; the token itself must start with `@`
pub struct MentionRecognizer {
    extractor: Arc<dyn EntityExtractor>,
}

impl MentionRecognizer {
    /// Recognizer backed by `extractor`
    pub fn new(extractor: Arc<dyn EntityExtractor>) -> Self {
        Self { extractor }
    }
}

impl Recognizer for MentionRecognizer {
    fn name(&self) -> &'static str {
        "mention"
    }

    fn enabled(&self, options: &ExtractOptions) -> bool {
        options.mentions
    }

    fn try_classify(&self, token: &Token<'_>, _ctx: &ClassifyContext<'_>) -> Option<Recognized> {
        if !token.text.starts_with(MENTION_SIGILS) {
            return None;
        }
        let entity = self.extractor.extract_mentions(token.text).into_iter().next()?;
        let matched_len = anchored_entity(token.text, &entity, &MENTION_SIGILS)?;
        Some(Recognized {
            classification: Classification::Mention {
                handle: entity.text,
            },
            matched_len,
        })
    }
}

use super::{anchored_entity, Classification, ClassifyContext, Recognized, Recognizer};
use crate::collaborators::EntityExtractor;
use crate::domain::options::ExtractOptions;
use crate::domain::token::Token;
use std::sync::Arc;

/// First hashtag of a token, when it starts the token
pub struct HashtagRecognizer {
    extractor: Arc<dyn EntityExtractor>,
}

impl HashtagRecognizer {
    /// Recognizer backed by `extractor`
    pub fn new(extractor: Arc<dyn EntityExtractor>) -> Self {
        Self { extractor }
    }
}

impl Recognizer for HashtagRecognizer {
    fn name(&self) -> &'static str {
        "hashtag"
    }

    fn enabled(&self, options: &ExtractOptions) -> bool {
        options.hashtags
    }

    fn try_classify(&self, token: &Token<'_>, _ctx: &ClassifyContext<'_>) -> Option<Recognized> {
        let entity = self.extractor.extract_hashtags(token.text).into_iter().next()?;
        let Some(matched_len) = anchored_entity(token.text, &entity, &['#', '＃']) else {
            log::trace!(
                "hashtag {:?} not anchored at start of {:?}",
                entity.text,
                token.text
            );
            return None;
        };
        Some(Recognized {
            classification: Classification::Hashtag { tag: entity.text },
            matched_len,
        })
    }
}

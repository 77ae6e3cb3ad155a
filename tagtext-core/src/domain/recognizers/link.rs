use super::{Classification, ClassifyContext, Recognized, Recognizer};
use crate::collaborators::LinkTester;
use crate::domain::options::ExtractOptions;
use crate::domain::token::Token;
use std::sync::Arc;

/// Whole-token hyperlinks; never split
pub struct LinkRecognizer {
    tester: Arc<dyn LinkTester>,
}

impl LinkRecognizer {
    /// Recognizer backed by `tester`
    pub fn new(tester: Arc<dyn LinkTester>) -> Self {
        Self { tester }
    }
}

impl Recognizer for LinkRecognizer {
    fn name(&self) -> &'static str {
        "link"
    }

    fn enabled(&self, options: &ExtractOptions) -> bool {
        options.links
    }

    fn try_classify(&self, token: &Token<'_>, _ctx: &ClassifyContext<'_>) -> Option<Recognized> {
        if !self.tester.is_link(token.text) {
            return None;
        }
        Some(Recognized::whole(
            Classification::Link {
                url: token.text.to_string(),
            },
            token,
        ))
    }
}

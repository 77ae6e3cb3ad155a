use super::{Classification, ClassifyContext, Recognized, Recognizer};
use crate::domain::emoji::is_emoji_token;
use crate::domain::options::ExtractOptions;
use crate::domain::token::Token;

/// Tokens made entirely of emoji
#[derive(Debug, Default)]
pub struct EmojiRecognizer;

impl Recognizer for EmojiRecognizer {
    fn name(&self) -> &'static str {
        "emoji"
    }

    fn enabled(&self, options: &ExtractOptions) -> bool {
        options.emoji
    }

    fn try_classify(&self, token: &Token<'_>, _ctx: &ClassifyContext<'_>) -> Option<Recognized> {
        is_emoji_token(token.text).then(|| Recognized::whole(Classification::Emoji, token))
    }
}

//! Twitter-text style hashtag and mention extraction

use super::{Entity, EntityExtractor};
use crate::error::{Result, TagTextError};
use regex::Regex;

/// Characters allowed inside a hashtag besides letters, marks and digits
const HASHTAG_EXTRA: &str = r"_\x{200c}\x{200d}\x{a67e}\x{05be}\x{05f3}\x{05f4}\x{ff5e}\x{301c}\x{309b}\x{309c}\x{30a0}\x{30fb}\x{3003}\x{0f0b}\x{0f0c}\x{00b7}";

/// Latin letters with diacritics; a mention may not run into one
fn is_latin_accent(ch: char) -> bool {
    matches!(ch,
        '\u{00c0}'..='\u{00d6}'
        | '\u{00d8}'..='\u{00f6}'
        | '\u{00f8}'..='\u{00ff}'
        | '\u{0100}'..='\u{024f}'
        | '\u{0253}'..='\u{0254}'
        | '\u{0256}'..='\u{0257}'
        | '\u{0259}'
        | '\u{025b}'
        | '\u{0263}'
        | '\u{0268}'
        | '\u{026f}'
        | '\u{0272}'
        | '\u{0289}'
        | '\u{028b}'
        | '\u{02bb}'
        | '\u{0300}'..='\u{036f}'
        | '\u{1e00}'..='\u{1eff}')
}

/// Default [`EntityExtractor`] following Twitter's published entity rules
///
/// Hashtags need at least one letter and may not be preceded by a word
/// character or `&`. Mentions are 1-20 ASCII word characters and may not be
/// preceded by a word character or one of `!#$%&*@`. Mentions followed by a
/// `/list` slug are list references and are not reported.
#[derive(Debug)]
pub struct TwitterEntityExtractor {
    hashtag: Regex,
    mention: Regex,
}

impl TwitterEntityExtractor {
    /// Compile the entity patterns
    pub fn new() -> Result<Self> {
        let hashtag = format!(
            r"(?:^|[^&\p{{L}}\p{{M}}\p{{Nd}}{extra}])([#＃])((?:[\p{{L}}\p{{M}}\p{{Nd}}{extra}])*[\p{{L}}\p{{M}}](?:[\p{{L}}\p{{M}}\p{{Nd}}{extra}])*)",
            extra = HASHTAG_EXTRA
        );
        let mention = r"(?:^|[^a-zA-Z0-9_!#$%&*@＠])([@＠])([a-zA-Z0-9_]{1,20})(/[a-zA-Z][a-zA-Z0-9_-]{0,24})?";

        Ok(Self {
            hashtag: Regex::new(&hashtag)
                .map_err(|e| TagTextError::collaborator("hashtag extractor", e))?,
            mention: Regex::new(mention)
                .map_err(|e| TagTextError::collaborator("mention extractor", e))?,
        })
    }
}

impl EntityExtractor for TwitterEntityExtractor {
    fn extract_hashtags(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for caps in self.hashtag.captures_iter(text) {
            let (Some(sigil), Some(body)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            // `#` followed by VS16 or the keycap mark is a keycap emoji
            if body.as_str().starts_with(['\u{FE0F}', '\u{20E3}']) {
                continue;
            }
            let after = &text[body.end()..];
            if after.starts_with(['#', '＃']) || after.starts_with("://") {
                continue;
            }
            entities.push(Entity::new(body.as_str(), sigil.start(), body.end()));
        }

        entities
    }

    fn extract_mentions(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for caps in self.mention.captures_iter(text) {
            let (Some(sigil), Some(handle)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let end = caps.get(3).map_or(handle.end(), |slug| slug.end());
            let after = &text[end..];
            let runs_on = after.starts_with(['@', '＠'])
                || after.starts_with("://")
                || after.chars().next().is_some_and(is_latin_accent);
            if runs_on || caps.get(3).is_some() {
                continue;
            }
            entities.push(Entity::new(handle.as_str(), sigil.start(), handle.end()));
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> TwitterEntityExtractor {
        TwitterEntityExtractor::new().unwrap()
    }

    fn texts(entities: Vec<Entity>) -> Vec<String> {
        entities.into_iter().map(|e| e.text).collect()
    }

    #[test]
    fn test_hashtags() {
        let ex = extractor();
        assert_eq!(texts(ex.extract_hashtags("#world")), vec!["world"]);
        assert_eq!(texts(ex.extract_hashtags("#world!")), vec!["world"]);
        assert_eq!(texts(ex.extract_hashtags("#日本語")), vec!["日本語"]);
        assert_eq!(texts(ex.extract_hashtags("＃fullwidth")), vec!["fullwidth"]);
        assert_eq!(texts(ex.extract_hashtags("#a #b")), vec!["a", "b"]);
    }

    #[test]
    fn test_hashtag_rejections() {
        let ex = extractor();
        assert!(ex.extract_hashtags("#123").is_empty());
        assert!(ex.extract_hashtags("#").is_empty());
        assert!(ex.extract_hashtags("&#39").is_empty());
        assert!(ex.extract_hashtags("abc#def").is_empty());
        assert!(ex.extract_hashtags("#foo#bar").is_empty());
        assert!(ex.extract_hashtags("#http://x").is_empty());
        assert!(ex.extract_hashtags("#\u{FE0F}\u{20E3}").is_empty());
        assert!(ex.extract_hashtags("#\u{20E3}").is_empty());
        assert!(ex.extract_hashtags("＃\u{FE0F}\u{20E3}").is_empty());
    }

    #[test]
    fn test_hashtag_spans() {
        let ex = extractor();
        let entity = &ex.extract_hashtags("(#foo)")[0];
        assert_eq!((entity.start, entity.end), (1, 5));

        let entity = &ex.extract_hashtags("＃tag")[0];
        assert_eq!(entity.start, 0);
        assert_eq!(entity.end, "＃tag".len());
    }

    #[test]
    fn test_mentions() {
        let ex = extractor();
        assert_eq!(texts(ex.extract_mentions("@alice")), vec!["alice"]);
        assert_eq!(texts(ex.extract_mentions("@alice,")), vec!["alice"]);
        assert_eq!(texts(ex.extract_mentions("＠bob")), vec!["bob"]);
        assert_eq!(
            texts(ex.extract_mentions("@abcdefghijklmnopqrstuvwxyz")),
            vec!["abcdefghijklmnopqrst"]
        );
    }

    #[test]
    fn test_mention_rejections() {
        let ex = extractor();
        assert!(ex.extract_mentions("foo@bar").is_empty());
        assert!(ex.extract_mentions("@alice@bob").is_empty());
        assert!(ex.extract_mentions("@alice/team").is_empty());
        assert!(ex.extract_mentions("@josé").is_empty());
        assert!(ex.extract_mentions("@").is_empty());
    }
}

//! Input sanitizer

use std::borrow::Cow;

/// Prepare raw text for splitting
///
/// Currently the identity function for every flag combination. The flags are
/// accepted so that cleanup specific to hashtag or mention extraction can be
/// added here without changing callers.
pub fn sanitize(text: &str, _extract_hashtags: bool, _extract_mentions: bool) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_is_identity() {
        for (hashtags, mentions) in [(true, true), (true, false), (false, true), (false, false)] {
            let out = sanitize("#tag @user ?prop", hashtags, mentions);
            assert_eq!(out, "#tag @user ?prop");
            assert!(matches!(out, Cow::Borrowed(_)));
        }
    }
}

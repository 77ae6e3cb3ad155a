//! Property tests for lossless segmentation

use proptest::prelude::*;
use tagtext_core::domain::{join_tokens, split_words};
use tagtext_core::{join_segments, ExtractOptions, Segmenter};

fn options() -> impl Strategy<Value = ExtractOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(links, hashtags, mentions, props, emoji)| ExtractOptions {
            links,
            hashtags,
            mentions,
            props,
            emoji,
        },
    )
}

/// Words biased toward things the recognizers care about
fn social_text() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        "[a-z]{1,8}",
        "#[a-zA-Z0-9_]{0,6}[,.!]?",
        "@[a-zA-Z0-9_]{0,6}[,.!]?",
        "\\?[a-z0-9]{0,5}[-,]?",
        "https?://[a-z]{1,6}\\.(com|org|io)(/[a-z]{0,4})?",
        "[😀🎉👍🏽❤️]{1,3}",
        "[a-z]{0,3}[@#?][a-z]{0,3}",
    ];
    let space = prop_oneof![" ", "  ", "\t", "\n", "\u{3000}"];
    prop::collection::vec((word, space), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, s)| format!("{w}{s}"))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn segments_rejoin_to_input(text in social_text(), options in options()) {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment_with(&text, &options);
        prop_assert_eq!(join_segments(&segments), text);
    }

    #[test]
    fn arbitrary_text_rejoins(text in "\\PC{0,64}", options in options()) {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment_with(&text, &options);
        prop_assert_eq!(join_segments(&segments), text);
    }

    #[test]
    fn split_is_lossless(text in "\\PC{0,64}") {
        let tokens = split_words(&text);
        prop_assert_eq!(join_tokens(&tokens), text.clone());
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
        prop_assert!(tokens.iter().enumerate().all(|(i, t)| t.index == i));
    }

    #[test]
    fn split_is_idempotent(words in prop::collection::vec("[a-z#@?]{1,6}", 0..8)) {
        let normalized = words.join(" ");
        let once = join_tokens(&split_words(&normalized));
        let twice = join_tokens(&split_words(&once));
        prop_assert_eq!(&once, &normalized);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn disabled_kinds_never_appear(text in social_text()) {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment_with(&text, &ExtractOptions::none());
        prop_assert!(segments.iter().all(|s| s.action.is_none() && s.style.is_none()));
    }
}

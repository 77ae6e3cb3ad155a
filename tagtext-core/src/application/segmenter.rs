//! Classifier chain and segment builder

use crate::api::Input;
use crate::application::config::RenderConfig;
use crate::collaborators::{EntityExtractor, LinkTester, TwitterEntityExtractor, UrlLinkTester};
use crate::domain::{
    sanitize, split_words, Classification, ClassifyContext, EmojiRecognizer, ExtractOptions,
    HashtagRecognizer, LinkRecognizer, MentionRecognizer, PressAction, PropRecognizer,
    Recognized, Recognizer, Segment, SegmentKind, StyleSheet, Token,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Turns text into segments
///
/// Built once, then shared freely: a segmenter holds only compiled patterns,
/// collaborators and styles, all read-only.
pub struct Segmenter {
    recognizers: Vec<Box<dyn Recognizer>>,
    styles: StyleSheet,
    options: ExtractOptions,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.recognizers.iter().map(|r| r.name()).collect();
        f.debug_struct("Segmenter")
            .field("recognizers", &names)
            .field("styles", &self.styles)
            .field("options", &self.options)
            .finish()
    }
}

impl Segmenter {
    /// Segmenter with default collaborators, styles and options
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a segmenter
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// Segmenter configured from a [`RenderConfig`]
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        Self::builder()
            .options(config.extract)
            .styles(config.styles.clone())
            .build()
    }

    /// Options used by [`Segmenter::segment`]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Styles attached to matched segments
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Recognizer names in priority order
    pub fn recognizer_names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Segment `text` with this segmenter's default options
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        self.segment_with(text, &self.options)
    }

    /// Segment `text` with per-call options
    pub fn segment_with(&self, text: &str, options: &ExtractOptions) -> Vec<Segment> {
        let sanitized = sanitize(text, options.hashtags, options.mentions);
        let tokens = split_words(&sanitized);
        let ctx = ClassifyContext {
            options,
            text: &sanitized,
        };
        let active: Vec<&dyn Recognizer> = self
            .recognizers
            .iter()
            .filter(|r| r.enabled(options))
            .map(|r| r.as_ref())
            .collect();

        let mut segments = Vec::with_capacity(tokens.len() + tokens.len() / 2);
        for token in &tokens {
            if !token.is_word() {
                segments.push(Segment::plain(token.text, token.index));
                continue;
            }
            let recognized = Self::classify(&active, token, &ctx);
            self.build_segments(token, recognized, &mut segments);
        }

        log::debug!(
            "segmented {} bytes into {} tokens, {} segments",
            text.len(),
            tokens.len(),
            segments.len()
        );
        segments
    }

    /// Read `request.input` and segment it
    pub fn render(&self, request: RenderRequest) -> Result<Rendered> {
        let options = request.options.unwrap_or(self.options);
        let text = request.input.read_text()?;
        let segments = self.segment_with(&text, &options);
        let stats = SegmentStats::from_segments(&segments);
        Ok(Rendered { segments, stats })
    }

    /// First claim in chain order; Plain when nothing claims the token
    fn classify(
        active: &[&dyn Recognizer],
        token: &Token<'_>,
        ctx: &ClassifyContext<'_>,
    ) -> Recognized {
        for recognizer in active {
            if let Some(recognized) = recognizer.try_classify(token, ctx) {
                log::trace!("token {} {:?}: {}", token.index, token.text, recognizer.name());
                return recognized;
            }
        }
        log::trace!("token {} {:?}: plain", token.index, token.text);
        Recognized::whole(Classification::Plain, token)
    }

    fn build_segments(&self, token: &Token<'_>, recognized: Recognized, out: &mut Vec<Segment>) {
        let kind = recognized.classification.kind();
        let style = self.styles.for_kind(kind).cloned();

        if !recognized.classification.splits_remainder() {
            let action = match recognized.classification {
                Classification::Link { url } => Some(PressAction::OpenLink { url }),
                _ => None,
            };
            out.push(Segment {
                text: token.text.to_string(),
                kind,
                token_index: token.index,
                action,
                style,
            });
            return;
        }

        let Some((matched, remainder)) = token.text.split_at_checked(recognized.matched_len)
        else {
            log::warn!(
                "recognizer claimed {} bytes of {:?}; rendering as plain",
                recognized.matched_len,
                token.text
            );
            out.push(Segment::plain(token.text, token.index));
            return;
        };

        let text = matched.to_string();
        let action = match recognized.classification {
            Classification::Hashtag { .. } => PressAction::Hashtag { text: text.clone() },
            Classification::Mention { .. } => PressAction::Mention {
                text: text.clone(),
                index: token.index,
            },
            _ => PressAction::Prop {
                text: text.clone(),
                index: token.index,
            },
        };

        out.push(Segment {
            text,
            kind,
            token_index: token.index,
            action: Some(action),
            style,
        });
        out.push(Segment::plain(remainder, token.index));
    }
}

/// Builder for [`Segmenter`]
#[derive(Default)]
pub struct SegmenterBuilder {
    link_tester: Option<Arc<dyn LinkTester>>,
    entity_extractor: Option<Arc<dyn EntityExtractor>>,
    styles: StyleSheet,
    options: ExtractOptions,
    extra: Vec<Box<dyn Recognizer>>,
}

impl SegmenterBuilder {
    /// Replace the link tester
    pub fn link_tester(mut self, tester: Arc<dyn LinkTester>) -> Self {
        self.link_tester = Some(tester);
        self
    }

    /// Replace the hashtag/mention extractor
    pub fn entity_extractor(mut self, extractor: Arc<dyn EntityExtractor>) -> Self {
        self.entity_extractor = Some(extractor);
        self
    }

    /// Set the styles
    pub fn styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the default options
    pub fn options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a recognizer after the built-in chain, before the plain fallback
    pub fn recognizer(mut self, recognizer: Box<dyn Recognizer>) -> Self {
        self.extra.push(recognizer);
        self
    }

    /// Validate styles and initialise collaborators
    pub fn build(self) -> Result<Segmenter> {
        self.styles.validate()?;

        let link_tester: Arc<dyn LinkTester> = match self.link_tester {
            Some(tester) => tester,
            None => Arc::new(UrlLinkTester::new()?),
        };
        let extractor: Arc<dyn EntityExtractor> = match self.entity_extractor {
            Some(extractor) => extractor,
            None => Arc::new(TwitterEntityExtractor::new()?),
        };

        let mut recognizers: Vec<Box<dyn Recognizer>> = vec![
            Box::new(LinkRecognizer::new(link_tester)),
            Box::new(PropRecognizer::new()?),
            Box::new(HashtagRecognizer::new(Arc::clone(&extractor))),
            Box::new(MentionRecognizer::new(extractor)),
            Box::new(EmojiRecognizer),
        ];
        recognizers.extend(self.extra);

        Ok(Segmenter {
            recognizers,
            styles: self.styles,
            options: self.options,
        })
    }
}

/// One render call: input plus optional per-call options
#[derive(Debug)]
pub struct RenderRequest {
    /// Text source
    pub input: Input,
    /// Options for this call; the segmenter's defaults when `None`
    pub options: Option<ExtractOptions>,
}

impl RenderRequest {
    /// Request using the segmenter's default options
    pub fn new(input: impl Into<Input>) -> Self {
        Self {
            input: input.into(),
            options: None,
        }
    }

    /// Override the options for this call
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Output of [`Segmenter::render`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// Segments in document order
    pub segments: Vec<Segment>,
    /// Counts
    pub stats: SegmentStats,
}

impl Rendered {
    /// Concatenated segment text; equal to the input
    pub fn text(&self) -> String {
        crate::domain::join_segments(&self.segments)
    }

    /// Pretty-printed JSON of segments and counts
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Segment counts for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentStats {
    /// Tokens produced by the splitter
    pub tokens: usize,
    /// Segments produced
    pub segments: usize,
    /// Plain segments, including whitespace and remainders
    pub plain: usize,
    /// Link segments
    pub links: usize,
    /// Prop segments
    pub props: usize,
    /// Hashtag segments
    pub hashtags: usize,
    /// Mention segments
    pub mentions: usize,
    /// Emoji segments
    pub emoji: usize,
}

impl SegmentStats {
    /// Count `segments`
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut stats = SegmentStats {
            segments: segments.len(),
            tokens: segments
                .last()
                .map_or(0, |last| last.token_index + 1),
            ..Default::default()
        };
        for segment in segments {
            match segment.kind {
                SegmentKind::Plain => stats.plain += 1,
                SegmentKind::Link => stats.links += 1,
                SegmentKind::Prop => stats.props += 1,
                SegmentKind::Hashtag => stats.hashtags += 1,
                SegmentKind::Mention => stats.mentions += 1,
                SegmentKind::Emoji => stats.emoji += 1,
            }
        }
        stats
    }

    /// Count for one kind
    pub fn count(&self, kind: SegmentKind) -> usize {
        match kind {
            SegmentKind::Plain => self.plain,
            SegmentKind::Link => self.links,
            SegmentKind::Prop => self.props,
            SegmentKind::Hashtag => self.hashtags,
            SegmentKind::Mention => self.mentions,
            SegmentKind::Emoji => self.emoji,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::Entity;

    fn kinds(segments: &[Segment]) -> Vec<SegmentKind> {
        segments.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_chain_order() {
        let segmenter = Segmenter::new().unwrap();
        assert_eq!(
            segmenter.recognizer_names(),
            vec!["link", "prop", "hashtag", "mention", "emoji"]
        );
    }

    #[test]
    fn test_whitespace_is_plain() {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment("a \n b");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].text, " \n ");
        assert_eq!(segments[1].kind, SegmentKind::Plain);
        assert!(segments[1].style.is_none());
    }

    #[test]
    fn test_hashtag_remainder() {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment("#rust!");
        assert_eq!(kinds(&segments), vec![SegmentKind::Hashtag, SegmentKind::Plain]);
        assert_eq!(segments[0].text, "#rust");
        assert_eq!(segments[1].text, "!");
        assert_eq!(segments[0].token_index, segments[1].token_index);
        assert_eq!(
            segments[0].action,
            Some(PressAction::Hashtag {
                text: "#rust".into()
            })
        );
    }

    #[test]
    fn test_empty_remainder_kept() {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment("?name");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Prop);
        assert_eq!(segments[1].text, "");
    }

    #[test]
    fn test_link_gets_action_and_style() {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment("https://example.com");
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0].action,
            Some(PressAction::OpenLink {
                url: "https://example.com".into()
            })
        );
        assert_eq!(segments[0].style.as_ref().and_then(|s| s.color.as_deref()), Some("#2980b9"));
    }

    #[test]
    fn test_emoji_not_pressable() {
        let segmenter = Segmenter::new().unwrap();
        let segments = segmenter.segment("\u{1F600}");
        assert_eq!(segments[0].kind, SegmentKind::Emoji);
        assert!(!segments[0].is_pressable());
        assert!(segments[0].style.is_some());
    }

    struct Misbehaving;

    impl Recognizer for Misbehaving {
        fn name(&self) -> &'static str {
            "misbehaving"
        }

        fn try_classify(&self, _token: &Token<'_>, _ctx: &ClassifyContext<'_>) -> Option<Recognized> {
            Some(Recognized {
                classification: Classification::Hashtag { tag: "x".into() },
                matched_len: 1,
            })
        }
    }

    #[test]
    fn test_bad_split_falls_back_to_plain() {
        let segmenter = Segmenter::builder()
            .recognizer(Box::new(Misbehaving))
            .build()
            .unwrap();
        // 'é' is two bytes; a one-byte claim is not a char boundary
        let segments = segmenter.segment("é");
        assert_eq!(segments, vec![Segment::plain("é", 0)]);
    }

    struct NoEntities;

    impl EntityExtractor for NoEntities {
        fn extract_hashtags(&self, _text: &str) -> Vec<Entity> {
            Vec::new()
        }

        fn extract_mentions(&self, _text: &str) -> Vec<Entity> {
            Vec::new()
        }
    }

    #[test]
    fn test_injected_extractor() {
        let segmenter = Segmenter::builder()
            .entity_extractor(Arc::new(NoEntities))
            .build()
            .unwrap();
        let segments = segmenter.segment("#tag @user");
        assert!(segments.iter().all(|s| s.kind == SegmentKind::Plain));
    }

    #[test]
    fn test_invalid_style_rejected() {
        let mut styles = StyleSheet::default();
        styles.hashtag.color = Some("blue-ish".into());
        assert!(Segmenter::builder().styles(styles).build().is_err());
    }

    #[test]
    fn test_render_stats() {
        let segmenter = Segmenter::new().unwrap();
        let rendered = segmenter
            .render(RenderRequest::new("hi #a @b ?c"))
            .unwrap();
        assert_eq!(rendered.text(), "hi #a @b ?c");
        assert_eq!(rendered.stats.tokens, 7);
        assert_eq!(rendered.stats.hashtags, 1);
        assert_eq!(rendered.stats.mentions, 1);
        assert_eq!(rendered.stats.props, 1);
        assert_eq!(rendered.stats.count(SegmentKind::Plain), 7);
        assert_eq!(rendered.stats.segments, 10);
    }

    #[test]
    fn test_rendered_to_json() {
        let segmenter = Segmenter::new().unwrap();
        let rendered = segmenter.render(RenderRequest::new("#a")).unwrap();
        let json = rendered.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["segments"][0]["kind"], "hashtag");
        assert_eq!(value["stats"]["hashtags"], 1);
        let back: Rendered = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rendered);
    }

    #[test]
    fn test_render_options_override() {
        let segmenter = Segmenter::new().unwrap();
        let rendered = segmenter
            .render(RenderRequest::new("#a").with_options(ExtractOptions::none()))
            .unwrap();
        assert_eq!(rendered.stats.hashtags, 0);
        assert_eq!(rendered.segments.len(), 1);
    }
}

//! Lossless whitespace word splitting

/// Kind of token produced by the word splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of non-whitespace characters
    Word,
    /// Run of whitespace characters
    Whitespace,
}

/// A borrowed slice of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text
    pub text: &'a str,
    /// Position in the split sequence
    pub index: usize,
    /// Byte offset in the input
    pub offset: usize,
    /// Word or whitespace
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Whether this token is a content word
    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Byte offset one past the end of this token
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Whitespace as understood by the splitter
///
/// Unicode `White_Space` plus the byte order mark, which JavaScript-style
/// `\s` also treats as a separator.
#[inline]
pub fn is_split_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Split text into alternating word and whitespace runs
///
/// Concatenating the returned tokens in order reproduces `text` exactly.
/// Empty tokens are never produced, so empty input yields no tokens.
pub fn split_words(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (pos, ch) in text.char_indices() {
        let kind = if is_split_whitespace(ch) {
            TokenKind::Whitespace
        } else {
            TokenKind::Word
        };

        match current {
            Some(run) if run == kind => {}
            Some(run) => {
                tokens.push(Token {
                    text: &text[start..pos],
                    index: tokens.len(),
                    offset: start,
                    kind: run,
                });
                start = pos;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(run) = current {
        tokens.push(Token {
            text: &text[start..],
            index: tokens.len(),
            offset: start,
            kind: run,
        });
    }

    tokens
}

/// Join tokens back into a string
pub fn join_tokens(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_split_alternates_words_and_whitespace() {
        let tokens = split_words("Hello  world\tagain");
        assert_eq!(texts(&tokens), vec!["Hello", "  ", "world", "\t", "again"]);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert!(tokens[2].is_word());
    }

    #[test]
    fn test_split_keeps_leading_and_trailing_whitespace() {
        let tokens = split_words("  a b \n");
        assert_eq!(texts(&tokens), vec!["  ", "a", " ", "b", " \n"]);
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[4].kind, TokenKind::Whitespace);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_split_indices_and_offsets() {
        let text = "ab 😀 c";
        let tokens = split_words(text);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.index, i);
            assert_eq!(&text[token.offset..token.end()], token.text);
        }
    }

    #[test]
    fn test_split_unicode_whitespace() {
        let tokens = split_words("a\u{00A0}b\u{FEFF}c\u{3000}d");
        assert_eq!(
            texts(&tokens),
            vec!["a", "\u{00A0}", "b", "\u{FEFF}", "c", "\u{3000}", "d"]
        );
    }

    #[test]
    fn test_join_reproduces_input() {
        for text in ["", " ", "word", " lead", "trail ", "a  b\r\nc", "日本語 テキスト"] {
            assert_eq!(join_tokens(&split_words(text)), text);
        }
    }
}

//! Fixed emoji code-point table
//!
//! Lookup is a binary search over sorted, non-overlapping ranges; nothing is
//! allocated and the tables are shared read-only across threads.

use std::cmp::Ordering;

/// Pictographic code points, sorted by start
const PICTOGRAPHIC: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),   // ©
    (0x00AE, 0x00AE),   // ®
    (0x203C, 0x203C),   // ‼
    (0x2049, 0x2049),   // ⁉
    (0x2122, 0x2122),   // ™
    (0x2139, 0x2139),   // ℹ
    (0x2190, 0x21FF),   // arrows
    (0x231A, 0x231B),   // watch, hourglass
    (0x2328, 0x2328),   // keyboard
    (0x23CF, 0x23CF),   // eject
    (0x23E9, 0x23F3),   // media controls
    (0x23F8, 0x23FA),   // media controls
    (0x24C2, 0x24C2),   // Ⓜ
    (0x25AA, 0x25AB),   // small squares
    (0x25B6, 0x25B6),   // ▶
    (0x25C0, 0x25C0),   // ◀
    (0x25FB, 0x25FE),   // medium squares
    (0x2600, 0x27BF),   // miscellaneous symbols, dingbats
    (0x2934, 0x2935),   // curved arrows
    (0x2B00, 0x2BFF),   // miscellaneous symbols and arrows
    (0x3030, 0x3030),   // wavy dash
    (0x303D, 0x303D),   // part alternation mark
    (0x3297, 0x3297),   // circled ideograph congratulation
    (0x3299, 0x3299),   // circled ideograph secret
    (0x1F000, 0x1FAFF), // supplementary-plane emoji blocks
];

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const TEXT_PRESENTATION: char = '\u{FE0E}';
const EMOJI_PRESENTATION: char = '\u{FE0F}';
const COMBINING_KEYCAP: char = '\u{20E3}';

fn in_table(ch: char, table: &[(u32, u32)]) -> bool {
    let cp = ch as u32;
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Regional indicator letters; two of them form a flag
#[inline]
pub fn is_regional_indicator(ch: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&ch)
}

/// Characters that start a keycap sequence such as `1️⃣`
#[inline]
pub fn is_keycap_base(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '#' || ch == '*'
}

/// Standalone pictographic emoji
#[inline]
pub fn is_pictographic(ch: char) -> bool {
    !is_regional_indicator(ch) && in_table(ch, PICTOGRAPHIC)
}

/// Characters that only modify or join a preceding emoji
#[inline]
pub fn is_component(ch: char) -> bool {
    matches!(
        ch,
        ZERO_WIDTH_JOINER | TEXT_PRESENTATION | EMOJI_PRESENTATION | COMBINING_KEYCAP
    ) || ('\u{E0020}'..='\u{E007F}').contains(&ch)
}

/// Whether the whole token is made of emoji
///
/// Accepts pictographic characters, flag pairs and keycap sequences, each
/// optionally followed by joiners, variation selectors, skin-tone modifiers
/// or tag characters.
pub fn is_emoji_token(token: &str) -> bool {
    let chars: Vec<char> = token.chars().collect();
    let mut i = 0;
    let mut seen = false;

    while i < chars.len() {
        let ch = chars[i];

        if is_keycap_base(ch) {
            let mut j = i + 1;
            if chars.get(j) == Some(&EMOJI_PRESENTATION) {
                j += 1;
            }
            if chars.get(j) != Some(&COMBINING_KEYCAP) {
                return false;
            }
            i = j + 1;
            seen = true;
        } else if is_regional_indicator(ch) {
            if !chars.get(i + 1).is_some_and(|&next| is_regional_indicator(next)) {
                return false;
            }
            i += 2;
            seen = true;
        } else if is_pictographic(ch) {
            i += 1;
            seen = true;
        } else if seen && is_component(ch) {
            i += 1;
        } else {
            return false;
        }
    }

    seen
}

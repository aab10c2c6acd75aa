use super::at;

/// The Unicode replacement character, which stands in for any illegal byte sequence.
pub const REPLACEMENT: u32 = 0xFFFD;

/// The encoded length of the character at the start of some bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CharLen {
    One,
    Two,
    Three,
    Four,
    /// An illegal sequence, spanning the given number of bytes (never 0).
    Illegal(usize),
}

impl CharLen {
    /// The number of bytes this character spans.
    pub fn len(self) -> usize {
        match self {
            CharLen::One => 1,
            CharLen::Two => 2,
            CharLen::Three => 3,
            CharLen::Four => 4,
            CharLen::Illegal(n) => n,
        }
    }
}

/// Detect the UTF-8 length of the character at the start of `s`.
///
/// Ill-formed sequences report the length of their maximal valid prefix, i.e. the lead byte
/// plus every continuation byte accepted before the first bad one. This is at least 1, so the
/// caller always makes progress and resynchronizes on the next plausible lead byte.
/// Overlong encodings, surrogates and values above U+10FFFF are all rejected at the second byte.
pub fn char_len(s: &[u8]) -> CharLen {
    let (len, second) = match at(s, 0) {
        0x00..=0x7F => return CharLen::One,
        0xC2..=0xDF => (CharLen::Two, 0x80..=0xBF),
        0xE0 => (CharLen::Three, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (CharLen::Three, 0x80..=0xBF),
        0xED => (CharLen::Three, 0x80..=0x9F),
        0xF0 => (CharLen::Four, 0x90..=0xBF),
        0xF1..=0xF3 => (CharLen::Four, 0x80..=0xBF),
        0xF4 => (CharLen::Four, 0x80..=0x8F),
        _ => return CharLen::Illegal(1), // stray continuation bytes, C0, C1, and F5..=FF.
    };

    if !second.contains(&at(s, 1)) {
        return CharLen::Illegal(1);
    }
    match (2..len.len()).find(|&i| !is_continuation(at(s, i))) {
        Some(i) => CharLen::Illegal(i),
        None => len,
    }
}

/// Decode the character at the start of `s`, returning its comparison key and encoded length.
///
/// ASCII letters are folded to lowercase, multibyte characters yield their codepoint, and illegal
/// sequences yield [REPLACEMENT]. An empty slice reads as the terminator, `(0, 1)`.
pub fn decode(s: &[u8]) -> (u32, usize) {
    let b = |i| u32::from(at(s, i));
    match char_len(s) {
        CharLen::One => (u32::from(at(s, 0).to_ascii_lowercase()), 1),
        CharLen::Two => (((b(0) & 0x1F) << 6) | (b(1) & 0x3F), 2),
        CharLen::Three => (
            ((b(0) & 0x0F) << 12) | ((b(1) & 0x3F) << 6) | (b(2) & 0x3F),
            3,
        ),
        CharLen::Four => (
            ((b(0) & 0x07) << 18) | ((b(1) & 0x3F) << 12) | ((b(2) & 0x3F) << 6) | (b(3) & 0x3F),
            4,
        ),
        CharLen::Illegal(n) => (REPLACEMENT, n),
    }
}

#[inline]
fn is_continuation(c: u8) -> bool {
    c & 0xC0 == 0x80
}

mod decode;
mod wrapper;

pub use decode::{CharLen, REPLACEMENT, char_len, decode};
pub use wrapper::{Natural, NaturalUtf8};

use std::cmp::Ordering;

/// Compare two strings in a natural order, ASCII case-insensitive.
///
/// Digit runs compare by their numeric value, while the text between them compares byte by byte.
pub fn natcmp(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
    compare::<AsciiCaseInsensitive>(a.as_ref(), b.as_ref())
}

/// Compare two strings in a natural order, with the text between numbers compared by decoded
/// UTF-8 codepoints. ASCII letters are still case-insensitive.
pub fn natcmp_utf8(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
    compare::<CodepointDecoding>(a.as_ref(), b.as_ref())
}

/// Whether `a` sorts strictly before `b` in the ASCII natural order.
pub fn natcmp_lt(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    natcmp(a, b).is_lt()
}

/// Whether `a` sorts strictly before `b` in the UTF-8 natural order.
pub fn natcmp_utf8_lt(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    natcmp_utf8(a, b).is_lt()
}

/// Compare two strings in a natural order, in the given mode.
pub fn natcmp_with(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>, mode: Mode) -> Ordering {
    mode.compare(a, b)
}

/// How the text between numbers is compared.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Single bytes, ASCII case-insensitive.
    #[default]
    Ascii,
    /// Decoded UTF-8 codepoints, ASCII case-insensitive.
    Utf8,
}

impl Mode {
    pub fn compare(self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Ordering {
        match self {
            Mode::Ascii => compare::<AsciiCaseInsensitive>(a.as_ref(), b.as_ref()),
            Mode::Utf8 => compare::<CodepointDecoding>(a.as_ref(), b.as_ref()),
        }
    }

    pub fn lt(self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
        self.compare(a, b).is_lt()
    }
}

/// A strategy to compare the text between numbers.
pub trait NonDigit {
    /// The comparison key of the character at the start of `s`, and how many bytes it spans.
    ///
    /// Must consume at least one byte, and never more than `s.len()` unless `s` is empty.
    fn key(s: &[u8]) -> (u32, usize);

    /// Compare the non-digit runs at the start of `a` and `b`, character by character.
    ///
    /// Stops at the first difference, or as soon as either side reaches a digit or its end.
    /// Returns the ordering and how many bytes were consumed on each side.
    fn compare_run(a: &[u8], b: &[u8]) -> (Ordering, usize, usize) {
        let (mut i, mut j) = (0, 0);
        while is_text(at(a, i)) && is_text(at(b, j)) {
            let (ka, la) = Self::key(&a[i..]);
            let (kb, lb) = Self::key(&b[j..]);
            if ka != kb {
                return (ka.cmp(&kb), i, j);
            }
            i += la;
            j += lb;
        }
        (Ordering::Equal, i, j)
    }
}

/// Compares single bytes, folding ASCII letters to lowercase.
#[derive(Debug)]
pub struct AsciiCaseInsensitive;

/// Compares whole UTF-8 decoded characters, folding ASCII letters to lowercase.
#[derive(Debug)]
pub struct CodepointDecoding;

impl NonDigit for AsciiCaseInsensitive {
    fn key(s: &[u8]) -> (u32, usize) {
        (u32::from(at(s, 0).to_ascii_lowercase()), 1)
    }
}

impl NonDigit for CodepointDecoding {
    fn key(s: &[u8]) -> (u32, usize) {
        decode(s)
    }
}

/// The natural order comparison, generic over how the text between numbers is compared.
///
/// A zero byte ends a string just like the end of the slice does, so everything after it is
/// ignored. This is a total order over any bytes, valid UTF-8 or not.
pub fn compare<S: NonDigit>(a: &[u8], b: &[u8]) -> Ordering {
    let (mut i, mut j) = (0, 0);
    loop {
        let (ordering, la, lb) = S::compare_run(&a[i..], &b[j..]);
        if ordering.is_ne() {
            return ordering;
        }
        (i, j) = (i + la, j + lb);

        let (ca, cb) = (at(a, i), at(b, j));
        match (ca, cb) {
            (0, 0) => return Ordering::Equal,
            (0, _) => return Ordering::Less, // a continuing string sorts after a finished one.
            (_, 0) => return Ordering::Greater,
            _ => {}
        }

        match (ca.is_ascii_digit(), cb.is_ascii_digit()) {
            (true, true) => {
                let (ordering, la, lb) = compare_digits(&a[i..], &b[j..]);
                if ordering.is_ne() {
                    return ordering;
                }
                (i, j) = (i + la, j + lb);
            }
            // a run only stops early when one side reaches a digit and the other does not.
            _ => return S::key(&a[i..]).0.cmp(&S::key(&b[j..]).0),
        }
    }
}

/// Compare the digit runs at the start of `a` and `b` by their numeric value.
///
/// Any number of digits is supported, since nothing is parsed: without leading zeros, a longer run
/// is a larger number, and runs of the same length compare like their digits do.
/// Equal values are ordered by their leading zeros, fewest first.
fn compare_digits(a: &[u8], b: &[u8]) -> (Ordering, usize, usize) {
    let (zeros_a, len_a) = digit_run(a);
    let (zeros_b, len_b) = digit_run(b);
    let (sig_a, sig_b) = (&a[zeros_a..len_a], &b[zeros_b..len_b]);

    let ordering = sig_a
        .len()
        .cmp(&sig_b.len())
        .then_with(|| sig_a.cmp(sig_b))
        .then_with(|| zeros_a.cmp(&zeros_b));
    (ordering, len_a, len_b)
}

/// The number of leading zeros and the total length of the digit run at the start of `s`.
fn digit_run(s: &[u8]) -> (usize, usize) {
    let zeros = s.iter().take_while(|&&c| c == b'0').count();
    let rest = s[zeros..].iter().take_while(|c| c.is_ascii_digit()).count();
    (zeros, zeros + rest)
}

/// The byte at `i`, or the zero terminator when out of bounds.
#[inline]
fn at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or_default()
}

#[inline]
fn is_text(c: u8) -> bool {
    c != 0 && !c.is_ascii_digit()
}

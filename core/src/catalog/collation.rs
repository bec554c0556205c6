use std::cmp::Ordering;

// Punctuation and symbols in collation order (CLDR root)
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%";
const SYMBOLS: &str = "`^+<=>|~$";

/// Compares two strings the way a locale-aware UI sort would
///
/// Characters are compared case-insensitively first, ranking whitespace
/// before punctuation, punctuation before symbols, symbols before digits and
/// digits before letters. Strings equal at that level are ordered with
/// lowercase before uppercase, then by code point.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| {
            a.chars()
                .map(|c| c.is_uppercase())
                .cmp(b.chars().map(|c| c.is_uppercase()))
        })
        .then_with(|| a.cmp(b))
}

/// Case-insensitive sort key of a single character
fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, 0)
    } else if let Some(i) = PUNCTUATION.find(c) {
        (1, i as u32)
    } else if let Some(i) = SYMBOLS.find(c) {
        (2, i as u32)
    } else if let Some(d) = c.to_digit(10) {
        (3, d)
    } else if c.is_alphabetic() {
        (4, fold_case(c) as u32)
    } else {
        (5, c as u32)
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

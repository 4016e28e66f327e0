//! Name ordering close to the default `localeCompare` collation.
//!
//! Strings compare first on their accent-stripped, case-folded letters, then
//! on accents, then on case (lowercase first). Raw code points break any
//! remaining tie so the order is total.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(value: &str) -> String {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(value: &str) -> String {
    value.nfd().flat_map(char::to_lowercase).collect()
}

// Lowercase sorts ahead of uppercase at equal letters.
fn case_key(value: &str) -> Vec<bool> {
    value
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .map(char::is_uppercase)
        .collect()
}

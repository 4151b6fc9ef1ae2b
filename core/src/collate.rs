//! Locale-style name collation for the rendered icon list.
//!
//! Approximates root-locale `localeCompare`. Characters first compare by
//! class (whitespace, punctuation, symbols, digits, letters), then within
//! the class; accents break ties next, then case (lower before upper), and
//! a final code-point comparison keeps the order total.

use crate::types::IconEntry;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// ASCII punctuation in root collation order.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%";

/// ASCII symbols in root collation order.
const SYMBOLS: &str = "`^+<=>|~$";

/// Compares two names the way the catalogue displays them.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// Sorts entries by name for display. Stable.
pub fn sort_for_display(entries: &mut [&IconEntry]) {
    entries.sort_by(|a, b| compare_names(a.name(), b.name()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

/// Primary weight of an already case-folded, mark-free character.
fn primary_weight(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        return (CharClass::Whitespace, c as u32);
    }
    if let Some(rank) = PUNCTUATION.find(c) {
        return (CharClass::Punctuation, rank as u32);
    }
    if let Some(rank) = SYMBOLS.find(c) {
        return (CharClass::Symbol, rank as u32);
    }
    if let Some(digit) = c.to_digit(10) {
        return (CharClass::Digit, digit);
    }
    if c.is_alphanumeric() {
        return (CharClass::Letter, c as u32);
    }
    (CharClass::Symbol, SYMBOLS.len() as u32 + c as u32)
}

fn base_letters(s: &str) -> impl Iterator<Item = (CharClass, u32)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(primary_weight)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(char::is_uppercase)
}

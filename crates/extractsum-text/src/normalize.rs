//! Line- and sentence-level text normalization.

use regex::Regex;
use std::sync::LazyLock;

/// A `<digits>.<digits?>` item and the whitespace after it. The digit before
/// and the letter after are checked by [`space_numbered_items`], so nothing
/// outside the item is consumed.
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]*\s+").unwrap());

/// A period, with optional surrounding whitespace, right after a digit.
static DIGIT_DOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9])\s*\.\s*").unwrap());

static NOT_PROCESSED_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s,.0-9()]").unwrap());

static NOT_LETTER_OR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

/// Drop non-ASCII characters and control characters other than tab.
pub fn strip_non_ascii(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_ascii() && (!c.is_ascii_control() || *c == '\t'))
        .collect()
}

/// Leave exactly one space between a list number like `2.` or `1.1` and the word after it.
///
/// The number must not follow a digit and the next character must be a letter.
pub fn space_numbered_items(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut copied = 0;
    let mut from = 0;
    while let Some(m) = NUMBERED_ITEM.find_at(line, from) {
        let after_digit = m.start() > 0 && bytes[m.start() - 1].is_ascii_digit();
        let before_letter = bytes.get(m.end()).is_some_and(u8::is_ascii_alphabetic);
        if after_digit || !before_letter {
            // Retry one digit further in, as a lookbehind search would.
            from = m.start() + 1;
            continue;
        }
        out.push_str(&line[copied..m.start()]);
        out.push_str(m.as_str().trim_end());
        out.push(' ');
        copied = m.end();
        from = m.end();
    }
    out.push_str(&line[copied..]);
    out
}

/// Collapse `3 . 5` into `3.5`.
pub fn collapse_digit_dots(line: &str) -> String {
    DIGIT_DOT.replace_all(line, "${1}.").into_owned()
}

/// Apply every line-level rule, in order.
pub fn normalize_line(line: &str) -> String {
    let line = strip_non_ascii(line);
    let line = space_numbered_items(&line);
    collapse_digit_dots(&line)
}

/// Letters, digits, whitespace, comma, period and parentheses, trimmed.
pub fn processed_text(sentence: &str) -> String {
    NOT_PROCESSED_CHAR
        .replace_all(sentence, "")
        .trim()
        .to_string()
}

/// Letters only, split on whitespace, filtered by `keep`, joined by single spaces.
pub fn cleaned_text(sentence: &str, keep: impl Fn(&str) -> bool) -> String {
    let letters = NOT_LETTER_OR_SPACE.replace_all(sentence, "");
    letters
        .split_whitespace()
        .filter(|w| w.len() > 1 && keep(w))
        .collect::<Vec<_>>()
        .join(" ")
}

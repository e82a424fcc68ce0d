//! The rule-driven extractor.
//!
//! Extraction is an explicit ordered rule table applied in sequence to an
//! accumulator. Each rule inspects the lowercased query and may write one
//! filter field; later rules overwrite earlier values for the same field.
//! The table order is therefore part of the public contract and changing it
//! changes observable precedence.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::filters::StringFilters;

/// One extraction rule over the lowercased, trimmed query text.
type Rule = fn(&str, &mut StringFilters);

/// Ordered rule table. Order is load-bearing:
/// - the numeric word-count rule runs after the literal phrases so digits
///   win over "two word";
/// - the loose "containing x" rule runs after the strict "letter x" rule so
///   the strict match wins;
/// - the vowel hint runs last among the character rules.
const RULES: &[Rule] = &[
    word_count_phrase,
    word_count_numeric,
    palindrome_hint,
    min_length_exclusive,
    max_length_exclusive,
    min_length_inclusive,
    max_length_inclusive,
    contains_letter_strict,
    contains_letter_loose,
    vowel_hint,
];

static WORD_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+words?").expect("static pattern"));

static LONGER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:longer|more)\s+than\s+(\d+)\s+characters?").expect("static pattern"));

static SHORTER_THAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:shorter|less)\s+than\s+(\d+)\s+characters?").expect("static pattern"));

static AT_LEAST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at\s+least\s+(\d+)\s+characters?").expect("static pattern"));

static AT_MOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:at\s+most|maximum)\s+(\d+)\s+characters?").expect("static pattern"));

static LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"contain(?:ing)?\s+(?:the\s+)?letter\s+([a-z])").expect("static pattern"));

static LOOSE_CONTAINS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"containing\s+([a-z])(?:\s|$)").expect("static pattern"));

/// Main entry point. Extracts a structured filter set from free-form text.
///
/// Runs every rule in table order over a lowercased, trimmed copy of
/// `query`, then checks the derived bounds for consistency. A query that
/// matches no pattern yields an empty `Ok` filter set; only contradictory
/// length bounds produce an error.
pub fn parse_query(query: &str) -> Result<StringFilters, ParseError> {
    let lowered = query.trim().to_lowercase();

    let mut filters = StringFilters::default();
    for rule in RULES {
        rule(&lowered, &mut filters);
    }

    filters.validate()?;
    Ok(filters)
}

/// Capture group 1 of `re` as a number; digit runs too large for `usize`
/// contribute no constraint.
fn captured_number(re: &Regex, query: &str) -> Option<usize> {
    re.captures(query)?.get(1)?.as_str().parse().ok()
}

/// Capture group 1 of `re` as its first character.
fn captured_char(re: &Regex, query: &str) -> Option<char> {
    re.captures(query)?.get(1)?.as_str().chars().next()
}

/// Literal phrase hints: "single word", "two word", "three word".
/// First match wins within the trio.
fn word_count_phrase(query: &str, filters: &mut StringFilters) {
    if query.contains("single word") {
        filters.word_count = Some(1);
    } else if query.contains("two word") {
        filters.word_count = Some(2);
    } else if query.contains("three word") {
        filters.word_count = Some(3);
    }
}

/// Digits followed by "word"/"words" overwrite any literal phrase hint.
fn word_count_numeric(query: &str, filters: &mut StringFilters) {
    if let Some(count) = captured_number(&WORD_COUNT_RE, query) {
        filters.word_count = Some(count);
    }
}

/// The bare stem matches "palindrome", "palindromic", "palindromes".
/// There is no negated form: this interpreter cannot request
/// non-palindromes.
fn palindrome_hint(query: &str, filters: &mut StringFilters) {
    if query.contains("palindrom") {
        filters.is_palindrome = Some(true);
    }
}

/// "longer than N" / "more than N" is strict; stored as the inclusive
/// bound N + 1.
fn min_length_exclusive(query: &str, filters: &mut StringFilters) {
    if let Some(n) = captured_number(&LONGER_THAN_RE, query) {
        filters.min_length = Some(n.saturating_add(1));
    }
}

/// "shorter than N" / "less than N" is strict; stored as the inclusive
/// bound N - 1, saturating at 0 for the degenerate "shorter than 0".
fn max_length_exclusive(query: &str, filters: &mut StringFilters) {
    if let Some(n) = captured_number(&SHORTER_THAN_RE, query) {
        filters.max_length = Some(n.saturating_sub(1));
    }
}

/// "at least N" is already inclusive.
fn min_length_inclusive(query: &str, filters: &mut StringFilters) {
    if let Some(n) = captured_number(&AT_LEAST_RE, query) {
        filters.min_length = Some(n);
    }
}

/// "at most N" / "maximum N" is already inclusive.
fn max_length_inclusive(query: &str, filters: &mut StringFilters) {
    if let Some(n) = captured_number(&AT_MOST_RE, query) {
        filters.max_length = Some(n);
    }
}

/// "contain(ing) (the) letter X".
fn contains_letter_strict(query: &str, filters: &mut StringFilters) {
    if let Some(letter) = captured_char(&LETTER_RE, query) {
        filters.contains_character = Some(letter);
    }
}

/// Loose "containing X" for a single trailing lowercase letter. Applies
/// only when the strict rule left the field empty; nothing before the
/// strict rule writes this field, so an occupied field means the strict
/// pattern matched and must win. A loose-only match still sets the field.
fn contains_letter_loose(query: &str, filters: &mut StringFilters) {
    if filters.contains_character.is_some() {
        return;
    }
    if let Some(letter) = captured_char(&LOOSE_CONTAINS_RE, query) {
        filters.contains_character = Some(letter);
    }
}

/// "first vowel" and bare "vowel" both collapse to a fixed 'a'. This is the
/// documented behavior, not a real vowel search; keep it literal.
fn vowel_hint(query: &str, filters: &mut StringFilters) {
    if query.contains("vowel") {
        filters.contains_character = Some('a');
    }
}

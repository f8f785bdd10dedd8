//! Working out which options an ANSWER directive refers to.
//!
//! People write answers in all sorts of ways: `ANSWER: B`, `ANSWER: a and c`,
//! `ANSWER: Jupiter`, `ANSWER: Mercury / Venus`. We try a sequence of
//! increasingly lenient strategies and take the first one that comes up with
//! anything at all. A strategy that finds an ambiguous match finds nothing;
//! we never guess.

use crate::language::Label;

use super::validate::RawOption;

type Strategy = fn(&str, &[RawOption]) -> Vec<Label>;

const STRATEGIES: [Strategy; 3] = [letter_scan, exact_content, delimited_tokens];

/// Resolve the text following an ANSWER directive into candidate labels,
/// deduplicated and in the order first seen. The labels are not guaranteed
/// to exist among the options; the caller reports those that don't.
pub fn resolve(raw: &str, options: &[RawOption]) -> Vec<Label> {
    STRATEGIES
        .iter()
        .map(|strategy| strategy(raw, options))
        .find(|labels| !labels.is_empty())
        .unwrap_or_default()
}

/// Every standalone single letter, eg `B` or the `a` and `c` in "a and c".
fn letter_scan(raw: &str, _options: &[RawOption]) -> Vec<Label> {
    let re = regex!(r"\b[A-Za-z]\b");

    let mut labels = Vec::new();
    for m in re.find_iter(raw) {
        if let Some(label) = m
            .as_str()
            .chars()
            .next()
            .and_then(Label::new)
        {
            push_unique(&mut labels, label);
        }
    }
    labels
}

/// The whole answer text is the content of exactly one option.
fn exact_content(raw: &str, options: &[RawOption]) -> Vec<Label> {
    match unique_content_match(raw, options) {
        Some(label) => vec![label],
        None => Vec::new(),
    }
}

/// The answer is a list such as "Mercury, Venus" or "A & Jupiter"; each item
/// is either a bare letter or the content of exactly one option.
fn delimited_tokens(raw: &str, options: &[RawOption]) -> Vec<Label> {
    let connectors = regex!(r"(?i)\band\b|\bor\b|\+|&");
    let separators = regex!(r"[,;/]");

    let list = connectors.replace_all(raw, ",");

    let mut labels = Vec::new();
    for token in separators.split(&list) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        // bare letters are always found by letter_scan first, so this only
        // matters if the stage order changes
        if let Some(label) = single_letter(token) {
            push_unique(&mut labels, label);
        } else if let Some(label) = unique_content_match(token, options) {
            push_unique(&mut labels, label);
        }
    }
    labels
}

fn single_letter(token: &str) -> Option<Label> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Label::new(c),
        _ => None,
    }
}

/// Find the one option whose normalized content equals the normalized text.
/// Two or more matching options are treated the same as none.
fn unique_content_match(text: &str, options: &[RawOption]) -> Option<Label> {
    let wanted = normalize(text);
    if wanted.is_empty() {
        return None;
    }

    let mut found = options
        .iter()
        .filter(|option| normalize(&option.content) == wanted);

    match (found.next(), found.next()) {
        (Some(option), None) => Some(option.label),
        _ => None,
    }
}

/// Lower case, with everything but ASCII letters and digits removed.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn push_unique(labels: &mut Vec<Label>, label: Label) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}

//! Deciding what kind of line we are looking at

use crate::language::Label;

use super::lines::Line;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind<'i> {
    Blank,
    Option(Label, &'i str),
    AnswerDirective(&'i str),
    Text(&'i str),
}

/// Classify a line by its trimmed content. Options are recognized before
/// answer directives, and anything that is neither is text.
pub fn classify(line: &Line) -> LineKind<'_> {
    let content = line
        .trimmed
        .as_str();

    if content.is_empty() {
        return LineKind::Blank;
    }

    if let Some((label, rest)) = read_option(content) {
        return LineKind::Option(label, rest);
    }

    if let Some(raw) = read_answer_directive(content) {
        return LineKind::AnswerDirective(raw);
    }

    LineKind::Text(content)
}

fn read_option(content: &str) -> Option<(Label, &str)> {
    let re = regex!(r"^([A-Za-z])[.):-]\s*(.+)$");

    let cap = re.captures(content)?;
    let label = cap
        .get(1)?
        .as_str()
        .chars()
        .next()
        .and_then(Label::new)?;
    let rest = cap
        .get(2)?
        .as_str()
        .trim();

    Some((label, rest))
}

fn read_answer_directive(content: &str) -> Option<&str> {
    let re = regex!(r"(?i)^(ANS|ANSWER|CORRECT ANSWER|ANSWER KEY)\s*[:=]\s*(.+)$");

    let cap = re.captures(content)?;
    cap.get(2)
        .map(|m| m.as_str())
}

/// Remove a question number like `1)`, `12.` or `3 -` from the start of a
/// stem. Only applied to the first line of a question.
pub fn strip_numbering(content: &str) -> &str {
    let re = regex!(r"^\d+\s*[).:-]\s+");

    match re.find(content) {
        Some(m) => &content[m.end()..],
        None => content,
    }
}

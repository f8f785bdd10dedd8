//! Splitting source text into numbered lines

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One line of the normalized input. Line numbers are 1-based and are what
/// every diagnostic refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub number: u32,
    pub raw: String,
    pub trimmed: String,
    pub has_leading_indent: bool,
}

impl Line {
    fn new(number: u32, raw: &str) -> Line {
        Line {
            number,
            raw: raw.to_string(),
            trimmed: raw
                .trim()
                .to_string(),
            has_leading_indent: raw.starts_with(char::is_whitespace),
        }
    }
}

/// Remove a leading byte order mark and convert any line ending convention
/// to bare `\n`.
pub fn normalize(content: &str) -> String {
    let content = content
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(content);

    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Split already normalized text into lines. A trailing newline yields a
/// final empty line, which is kept and numbered like any other.
pub fn split(normalized: &str) -> Vec<Line> {
    normalized
        .split('\n')
        .zip(1..)
        .map(|(raw, number)| Line::new(number, raw))
        .collect()
}

/// Extract lines `start..=end` of the given source text (after the same
/// normalization the parser applies), so a caller can present just the
/// segment belonging to one question. Bounds outside the text are clamped.
pub fn excerpt(content: &str, start: u32, end: u32) -> String {
    let normalized = normalize(content);
    let start = start.max(1);

    if end < start {
        return String::new();
    }

    normalized
        .split('\n')
        .zip(1u32..)
        .filter(|(_, number)| *number >= start && *number <= end)
        .map(|(raw, _)| raw)
        .collect::<Vec<_>>()
        .join("\n")
}

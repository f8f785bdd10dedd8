//! Types representing the questions recovered from an Aiken question bank

use std::fmt;

use serde::{Serialize, Serializer};

/// The single upper case letter identifying an option within a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(char);

impl Label {
    /// Accepts any ASCII letter, normalizing it to upper case.
    pub fn new(c: char) -> Option<Label> {
        if c.is_ascii_alphabetic() {
            Some(Label(c.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.0)
    }
}

/// A problem found in the input, optionally tied to the (1-based) line it
/// was found on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub message: String,
    pub line_number: Option<u32>,
}

impl Issue {
    pub fn new(message: impl Into<String>, line_number: Option<u32>) -> Issue {
        Issue {
            message: message.into(),
            line_number,
        }
    }

    pub fn at(message: impl Into<String>, line_number: u32) -> Issue {
        Issue::new(message, Some(line_number))
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub label: Label,
    pub content: String,
    pub is_correct: bool,
    pub order: u32,
}

/// A validated multiple choice question. There are always at least two
/// options and at least one of them is correct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub stem: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn correct_labels(&self) -> Vec<Label> {
        self.options
            .iter()
            .filter(|option| option.is_correct)
            .map(|option| option.label)
            .collect()
    }

    pub fn option(&self, label: Label) -> Option<&QuestionOption> {
        self.options
            .iter()
            .find(|option| option.label == label)
    }
}

/// A question block that was rejected, along with where it was in the source
/// and everything that was wrong with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedQuestion {
    pub stem_snippet: String,
    pub start_line: u32,
    pub end_line: u32,
    pub option_lines: Vec<(Label, u32)>,
    pub issues: Vec<Issue>,
}

/// Where an accepted question came from in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionSpan {
    pub question_index: usize,
    pub start_line: u32,
    pub end_line: u32,
    pub option_lines: Vec<(Label, u32)>,
}

/// Result of a successful import. Success only means at least one question
/// was recovered; callers should still report the skipped questions and
/// global issues.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedQuestion>,
    pub global_issues: Vec<Issue>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.skipped
            .is_empty()
            && self
                .global_issues
                .is_empty()
    }
}

/// Result of parsing in preview mode: the outcome plus one span per
/// accepted question, in the same order as `outcome.questions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub outcome: ParseOutcome,
    pub diagnostics: Vec<QuestionSpan>,
}

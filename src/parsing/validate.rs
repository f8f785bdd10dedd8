//! Turning an accumulated block into either a question or a skip report.

use crate::language::{Issue, Label, Question, QuestionOption, SkippedQuestion};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawOption {
    pub label: Label,
    pub content: String,
    pub is_correct: bool,
    pub line_number: Option<u32>,
}

impl RawOption {
    pub fn new(label: Label, content: &str, line_number: u32) -> RawOption {
        RawOption {
            label,
            content: content.to_string(),
            is_correct: false,
            line_number: Some(line_number),
        }
    }
}

/// The question currently being read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBlock {
    pub stem: String,
    pub options: Vec<RawOption>,
    pub start_line: u32,
    pub last_line: u32,
    pub issues: Vec<Issue>,

    // index into options of the most recently declared option, which is
    // where continuation lines go
    latest: Option<usize>,
}

impl RawBlock {
    pub fn new(stem: &str, line_number: u32) -> RawBlock {
        RawBlock {
            stem: stem.to_string(),
            options: Vec::new(),
            start_line: line_number,
            last_line: line_number,
            issues: Vec::new(),
            latest: None,
        }
    }

    pub fn has_options(&self) -> bool {
        !self
            .options
            .is_empty()
    }

    /// Record that the given line belongs to this block.
    pub fn touch(&mut self, line_number: u32) {
        self.last_line = self
            .last_line
            .max(line_number);
    }

    pub fn add_issue(&mut self, message: impl Into<String>, line_number: u32) {
        self.issues
            .push(Issue::at(message, line_number));
    }

    /// Declare an option. A label that was already declared in this block
    /// is overwritten in place by the later declaration.
    pub fn add_option(&mut self, label: Label, content: &str, line_number: u32) {
        let option = RawOption::new(label, content, line_number);

        match self
            .options
            .iter()
            .position(|existing| existing.label == label)
        {
            Some(i) => {
                self.options[i] = option;
                self.latest = Some(i);
            }
            None => {
                self.options
                    .push(option);
                self.latest = Some(
                    self.options
                        .len()
                        - 1,
                );
            }
        }
    }

    /// The option that continuation lines and blank lines are added to.
    pub fn latest_option(&mut self) -> Option<&mut RawOption> {
        let i = self.latest?;
        self.options
            .get_mut(i)
    }

    pub fn option_lines(&self) -> Vec<(Label, u32)> {
        self.options
            .iter()
            .filter_map(|option| {
                option
                    .line_number
                    .map(|line| (option.label, line))
            })
            .collect()
    }
}

/// Check a finished block. Every check runs so that the report lists all
/// problems at once; any issue at all, including those raised while the
/// block was being read, means the block is skipped.
pub fn finalize(block: RawBlock) -> Result<Question, SkippedQuestion> {
    let option_lines = block.option_lines();
    let RawBlock {
        stem,
        options,
        start_line,
        last_line,
        mut issues,
        ..
    } = block;

    let mut resolved = Vec::new();
    for option in options {
        let content = option
            .content
            .trim();

        if content.is_empty() {
            let message = format!("Option {} is blank.", option.label);
            issues.push(Issue::new(message, option.line_number));
            continue;
        }

        resolved.push(QuestionOption {
            label: option.label,
            content: content.to_string(),
            is_correct: option.is_correct,
            order: resolved.len() as u32,
        });
    }

    let stem = stem
        .trim()
        .to_string();

    if stem.is_empty() {
        issues.push(Issue::at("Question text is empty.", start_line));
    }

    if resolved.len() < 2 {
        issues.push(Issue::at(
            "Each question must include at least two options.",
            start_line,
        ));
    }

    if !resolved
        .iter()
        .any(|option| option.is_correct)
    {
        issues.push(Issue::at(
            "Each question must specify a correct answer via the ANSWER directive.",
            last_line,
        ));
    }

    if issues.is_empty() {
        Ok(Question {
            stem,
            options: resolved,
        })
    } else {
        Err(SkippedQuestion {
            stem_snippet: stem,
            start_line,
            end_line: last_line,
            option_lines,
            issues,
        })
    }
}

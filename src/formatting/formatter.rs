//! Code formatter for Aiken question banks

use crate::formatting::*;
use crate::language::*;
use crate::parsing::strip_numbering;

/// Width of the indent put in front of the continuation lines of a multi
/// line option, which is what marks them as belonging to the option when
/// the output is read back in.
const CONTINUATION: usize = 3;

/// Lay out questions in canonical form: the stem, one `A. content` line per
/// option, and an `ANSWER:` directive, with a blank line between questions.
pub fn format_with_renderer(questions: &[Question]) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for question in questions {
        output.format_question(question);
    }

    output.flush_current();

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    current: Syntax,
    buffer: String,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
            current: Syntax::Neutral,
            buffer: String::new(),
        }
    }

    fn append_fragment(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    /// Append content with specific syntax tagging, maintaining order
    fn append(&mut self, syntax: Syntax, content: &str) {
        self.flush_current();
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn switch_syntax(&mut self, new_syntax: Syntax) {
        self.flush_current();
        self.current = new_syntax;
    }

    fn reset_syntax(&mut self) {
        self.switch_syntax(Syntax::Neutral);
    }

    fn flush_current(&mut self) {
        if !self
            .buffer
            .is_empty()
        {
            self.fragments
                .push((
                    self.current,
                    self.buffer
                        .clone(),
                ));
            self.buffer
                .clear();
        }
    }

    #[cfg(test)]
    fn reset(&mut self) {
        self.fragments
            .clear();
        self.buffer
            .clear();
        self.current = Syntax::Neutral;
    }

    fn append_char(&mut self, c: char) {
        if c == '\n' {
            self.flush_current();
            self.append_fragment(Syntax::Newline, "\n");
        } else {
            self.buffer
                .push(c);
        }
    }

    fn is_empty(&self) -> bool {
        self.fragments
            .is_empty()
            && self
                .buffer
                .is_empty()
    }

    fn format_question(&mut self, question: &Question) {
        // separate from the preceding question with a blank line
        if !self.is_empty() {
            self.append_char('\n');
        }

        self.append_stem(&question.stem);

        for option in &question.options {
            self.append_option(option);
        }

        self.append_answer(&question.correct_labels());
    }

    fn append_stem(&mut self, stem: &str) {
        // a stem that itself starts like a question number needs a number of
        // its own in front, or reading it back would strip the wrong one
        if let Some(first) = stem
            .lines()
            .next()
        {
            if strip_numbering(first) != first {
                self.append(Syntax::Neutral, "1. ");
            }
        }

        self.switch_syntax(Syntax::Stem);
        for line in stem.lines() {
            for c in line.chars() {
                self.append_char(c);
            }
            self.append_char('\n');
        }
        self.reset_syntax();
    }

    fn append_option(&mut self, option: &QuestionOption) {
        let syntax = if option.is_correct {
            Syntax::Correct
        } else {
            Syntax::Option
        };

        self.append(
            Syntax::Label,
            &option
                .label
                .to_string(),
        );
        self.append(Syntax::Punctuation, ".");
        self.append_char(' ');

        for (i, line) in option
            .content
            .lines()
            .enumerate()
        {
            if i > 0 {
                self.append_char('\n');
                if !line.is_empty() {
                    self.append(Syntax::Indent, &" ".repeat(CONTINUATION));
                }
            }
            self.append(syntax, line);
        }
        self.append_char('\n');
    }

    fn append_answer(&mut self, labels: &[Label]) {
        self.append(Syntax::Directive, "ANSWER:");
        self.append_char(' ');

        for (i, label) in labels
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Punctuation, ",");
                self.append_char(' ');
            }
            self.append(Syntax::Answer, &label.to_string());
        }
        self.append_char('\n');
    }

    #[cfg(test)]
    fn to_string(&self) -> String {
        let mut result = String::new();

        for (_, content) in &self.fragments {
            result.push_str(content);
        }

        // include anything not yet flushed from the buffer
        if !self
            .buffer
            .is_empty()
        {
            result.push_str(&self.buffer);
        }

        result
    }
}

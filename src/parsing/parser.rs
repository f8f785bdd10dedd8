//! The line by line state machine that groups lines into question blocks.

use tracing::debug;

use crate::language::{Issue, ParseOutcome, Preview, Question, QuestionSpan, SkippedQuestion};

use super::classify::{classify, strip_numbering, LineKind};
use super::lines::Line;
use super::resolver::resolve;
use super::validate::{finalize, RawBlock};

#[derive(Debug, PartialEq, Eq)]
enum State {
    NoBlock,
    InBlock(RawBlock),
}

/// Everything found so far. Blocks are handed to `complete()` as they are
/// closed and end up in one of the lists here.
#[derive(Debug, Default)]
struct Collector {
    questions: Vec<Question>,
    diagnostics: Vec<QuestionSpan>,
    skipped: Vec<SkippedQuestion>,
    global_issues: Vec<Issue>,
}

/// Run the state machine over all lines. Malformed blocks are reported in
/// the result and never stop the lines after them from being read.
pub fn accumulate(lines: &[Line]) -> Preview {
    let mut collector = Collector::default();
    let mut state = State::NoBlock;

    for line in lines {
        state = collector.step(state, line);
    }
    collector.finish(state);

    debug!(
        questions = collector
            .questions
            .len(),
        skipped = collector
            .skipped
            .len(),
        global_issues = collector
            .global_issues
            .len(),
        "Accumulated question blocks"
    );

    Preview {
        outcome: ParseOutcome {
            questions: collector.questions,
            skipped: collector.skipped,
            global_issues: collector.global_issues,
        },
        diagnostics: collector.diagnostics,
    }
}

impl Collector {
    fn step(&mut self, state: State, line: &Line) -> State {
        match (state, classify(line)) {
            (State::NoBlock, LineKind::Blank) => State::NoBlock,
            (State::InBlock(mut block), LineKind::Blank) => {
                // keep paragraph breaks, in the stem or the option
                match block.latest_option() {
                    Some(option) => option
                        .content
                        .push('\n'),
                    None => block
                        .stem
                        .push('\n'),
                }
                State::InBlock(block)
            }

            (State::NoBlock, LineKind::AnswerDirective(_)) => {
                self.global_issues
                    .push(Issue::at(
                        "ANSWER directive appeared before any question",
                        line.number,
                    ));
                State::NoBlock
            }
            (State::InBlock(mut block), LineKind::AnswerDirective(raw)) => {
                block.touch(line.number);
                if block.has_options() {
                    apply_answer(&mut block, raw, line.number);
                } else {
                    block.add_issue(
                        "ANSWER directive appeared before any options were defined",
                        line.number,
                    );
                }
                self.complete(block);
                State::NoBlock
            }

            (State::NoBlock, LineKind::Option(_, _)) => {
                self.global_issues
                    .push(Issue::at(
                        "Option encountered before the question text",
                        line.number,
                    ));
                State::NoBlock
            }
            (State::InBlock(mut block), LineKind::Option(label, content)) => {
                block.add_option(label, content, line.number);
                block.touch(line.number);
                State::InBlock(block)
            }

            (State::NoBlock, LineKind::Text(content)) => begin(content, line),
            (State::InBlock(mut block), LineKind::Text(content)) => {
                if !block.has_options() {
                    append_line(&mut block.stem, content);
                    block.touch(line.number);
                    State::InBlock(block)
                } else if line.has_leading_indent {
                    if let Some(option) = block.latest_option() {
                        append_line(&mut option.content, content);
                    }
                    block.touch(line.number);
                    State::InBlock(block)
                } else {
                    // unindented text after the options is the next question
                    self.complete(block);
                    begin(content, line)
                }
            }
        }
    }

    fn finish(&mut self, state: State) {
        if let State::InBlock(mut block) = state {
            if !block.has_options() {
                let line = block.start_line;
                block.add_issue("A question is missing answer options", line);
            }
            self.complete(block);
        }
    }

    fn complete(&mut self, block: RawBlock) {
        let start_line = block.start_line;
        let end_line = block.last_line;
        let option_lines = block.option_lines();

        match finalize(block) {
            Ok(question) => {
                self.diagnostics
                    .push(QuestionSpan {
                        question_index: self
                            .questions
                            .len(),
                        start_line,
                        end_line,
                        option_lines,
                    });
                self.questions
                    .push(question);
            }
            Err(skipped) => {
                debug!(
                    start_line,
                    end_line,
                    issues = skipped
                        .issues
                        .len(),
                    "Skipping question"
                );
                self.skipped
                    .push(skipped);
            }
        }
    }
}

fn begin(content: &str, line: &Line) -> State {
    State::InBlock(RawBlock::new(strip_numbering(content), line.number))
}

fn append_line(target: &mut String, content: &str) {
    target.push('\n');
    target.push_str(content);
}

/// Mark the options named by the directive as correct, noting any that
/// don't exist.
fn apply_answer(block: &mut RawBlock, raw: &str, line_number: u32) {
    let labels = resolve(raw, &block.options);

    if labels.is_empty() {
        block.add_issue("ANSWER directive is missing option letters", line_number);
        return;
    }

    for label in labels {
        match block
            .options
            .iter()
            .position(|option| option.label == label)
        {
            Some(i) => block.options[i].is_correct = true,
            None => block.add_issue(
                format!("ANSWER references option {} which was not provided", label),
                line_number,
            ),
        }
    }
}

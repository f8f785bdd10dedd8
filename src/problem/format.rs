use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use std::path::Path;
use quizbank::{
    formatting::Render,
    language::{Issue, LoadingError, ParseError, QuestionSpan, SkippedQuestion},
    parsing,
};

/// Format a failed parse with the full explanation of what was expected
pub fn full_parsing_error<'i>(
    error: &ParseError,
    filename: &'i Path,
    renderer: &dyn Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);

    format!(
        r#"
{}: {} {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a failed parse with concise single-line output
pub fn concise_parsing_error<'i>(
    error: &ParseError,
    filename: &'i Path,
    renderer: &dyn Render,
) -> String {
    let (problem, _) = generate_error_message(error, renderer);

    format!(
        "{}: {} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}

/// Format an issue with concise single-line output
pub fn concise_issue<'i>(issue: &Issue, filename: &'i Path) -> String {
    match issue.line_number {
        Some(line) => format!(
            "{}: {}:{} {}",
            "warning".bright_yellow(),
            filename.to_string_lossy(),
            line,
            issue
                .message
                .bold()
        ),
        None => format!(
            "{}: {} {}",
            "warning".bright_yellow(),
            filename.to_string_lossy(),
            issue
                .message
                .bold()
        ),
    }
}

/// Format a skipped question with the source lines it came from, marking
/// the lines that have problems, followed by the list of problems.
pub fn full_skipped_question<'i>(
    skipped: &SkippedQuestion,
    filename: &'i Path,
    source: &'i str,
) -> String {
    let marked: Vec<u32> = skipped
        .issues
        .iter()
        .filter_map(|issue| issue.line_number)
        .collect();

    let code = source_context(source, skipped.start_line, skipped.end_line, &marked);

    let mut problems = String::new();
    for issue in &skipped.issues {
        problems.push_str(&format!("{} {}\n", "-".bright_red(), issue));
    }

    format!(
        r#"
{}: {}:{}-{} question skipped

{}

{}
        "#,
        "warning".bright_yellow(),
        filename.to_string_lossy(),
        skipped.start_line,
        skipped.end_line,
        code,
        problems
    )
    .trim_ascii()
    .to_string()
}

/// Format an accepted question's span as a single line
pub fn concise_question_span<'i>(span: &QuestionSpan, filename: &'i Path) -> String {
    let options: Vec<String> = span
        .option_lines
        .iter()
        .map(|(label, line)| format!("{}@{}", label, line))
        .collect();

    format!(
        "{}: {}:{}-{} question {} [{}]",
        "ok".bright_green(),
        filename.to_string_lossy(),
        span.start_line,
        span.end_line,
        span.question_index + 1,
        options.join(" ")
    )
}

/// Show lines `start..=end` with a line number gutter, pointing out the
/// marked ones.
fn source_context(source: &str, start: u32, end: u32, marked: &[u32]) -> String {
    let width = 3.max(
        end.to_string()
            .len(),
    );

    let code = parsing::excerpt(source, start, end);

    let mut lines = Vec::new();
    for (line, text) in (start.max(1)..).zip(code.lines()) {
        let gutter = if marked.contains(&line) {
            format!("{}", ">".bright_red())
        } else {
            " ".to_string()
        };
        lines.push(format!(
            "{} {:>width$} {} {}",
            gutter,
            line.bright_blue(),
            '|'.bright_blue(),
            text
        ));
    }

    lines.join("\n")
}

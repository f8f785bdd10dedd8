//! parser for Aiken question banks

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, ParseError, ParseOutcome, Preview};

mod classify;
mod lines;
mod parser;
mod resolver;
mod validate;

pub use lines::excerpt;
pub(crate) use classify::strip_numbering;

/// Read a file and return an owned String, which the caller then hands to
/// parse() or preview().
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse a question bank for import. Succeeds if at least one question was
/// recovered; the outcome still lists everything that was skipped.
pub fn parse(content: &str) -> Result<ParseOutcome, ParseError> {
    preview(content).map(|preview| preview.outcome)
}

/// Parse a question bank, additionally returning the source span of every
/// accepted question so that it can be highlighted or re-extracted with
/// [`excerpt()`].
pub fn preview(content: &str) -> Result<Preview, ParseError> {
    let normalized = lines::normalize(content);

    if normalized
        .trim()
        .is_empty()
    {
        debug!("Empty input");
        return Err(ParseError::EmptyInput);
    }

    let lines = lines::split(&normalized);
    let preview = parser::accumulate(&lines);

    let count = preview
        .outcome
        .questions
        .len();

    if count == 0 {
        debug!("No valid questions");
        let ParseOutcome {
            skipped,
            global_issues,
            ..
        } = preview.outcome;
        return Err(ParseError::NoValidQuestions {
            skipped,
            global_issues,
        });
    }

    debug!(
        "Found {} question{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(preview)
}

use std::{fmt, path::Path};

use thiserror::Error;

use super::{Issue, SkippedQuestion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.problem, self.details)
        }
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// The two ways a whole parse can fail. Anything less serious than these is
/// reported as an [`Issue`] and parsing carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the question bank is empty")]
    EmptyInput,

    #[error(
        "no valid questions found ({} skipped, {} other issues)",
        skipped.len(),
        global_issues.len()
    )]
    NoValidQuestions {
        skipped: Vec<SkippedQuestion>,
        global_issues: Vec<Issue>,
    },
}

use crate::problem::Present;
use quizbank::{formatting::Render, language::*};

/// A small but complete question, used to show what the input is expected
/// to look like.
fn sample_question() -> Question {
    let options = ["Mercury", "Jupiter", "Saturn"]
        .iter()
        .zip('A'..)
        .enumerate()
        .filter_map(|(i, (content, c))| {
            Some(QuestionOption {
                label: Label::new(c)?,
                content: content.to_string(),
                is_correct: i == 1,
                order: i as u32,
            })
        })
        .collect();

    Question {
        stem: "Which is the largest planet?".to_string(),
        options,
    }
}

/// Generate problem and detail messages for a failed parse
pub fn generate_error_message(error: &ParseError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParseError::EmptyInput => (
            "Empty question bank".to_string(),
            format!(
                r#"
The input contained nothing but whitespace. A question bank is a sequence of
questions, each made up of the question text, two or more lettered options,
and a line naming the correct answer:

{}
                "#,
                sample_question().present(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParseError::NoValidQuestions {
            skipped,
            global_issues,
        } => (
            "No valid questions".to_string(),
            format!(
                r#"
None of the questions in the input could be read. {} question{} had to be
skipped and there {} {} further problem{} outside of any question. Each
question needs non-empty question text, at least two options labelled with a
letter, and an ANSWER line naming the correct option(s):

{}

Options can be labelled "A.", "A)", "A:" or "A-". The answer can be given as
letters ("ANSWER: B" or "ANSWER: A and C") or as the exact text of the
correct option ("ANSWER: Jupiter").
                "#,
                skipped.len(),
                if skipped.len() == 1 { "" } else { "s" },
                if global_issues.len() == 1 { "was" } else { "were" },
                global_issues.len(),
                if global_issues.len() == 1 { "" } else { "s" },
                sample_question().present(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}

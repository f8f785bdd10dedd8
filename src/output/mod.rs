//! Output generation for the quizbank CLI application

use serde::Serialize;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::debug;

use quizbank::language::{ParseOutcome, Preview};

static SUMMARY: &'static str = r#"{filename}: {questions} question{{ if plural }}s{{ endif }} ready to import
{{ if skipped }}  {skipped} skipped
{{ endif }}{{ if global_issues }}  {global_issues} line{{ if global_plural }}s{{ endif }} outside any question ignored
{{ endif }}"#;

#[derive(Serialize)]
struct Context {
    filename: String,
    questions: usize,
    plural: bool,
    skipped: usize,
    global_issues: usize,
    global_plural: bool,
}

/// Describe the result of an import in a few lines.
pub fn summary(filename: &Path, outcome: &ParseOutcome) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", SUMMARY)?;

    let questions = outcome
        .questions
        .len();
    let global_issues = outcome
        .global_issues
        .len();

    let context = Context {
        filename: filename
            .to_string_lossy()
            .to_string(),
        questions,
        plural: questions != 1,
        skipped: outcome
            .skipped
            .len(),
        global_issues,
        global_plural: global_issues != 1,
    };

    let rendered = tt.render("summary", &context)?;
    debug!("Rendered summary of {} bytes", rendered.len());

    Ok(rendered)
}

/// Serialize the preview, for consumption by an editor or another program.
pub fn json(preview: &Preview) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(preview)
}

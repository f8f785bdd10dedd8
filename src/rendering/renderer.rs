//! Rendering formatted questions through a styling backend

use crate::formatting::*;
use crate::language::*;

/// We do the formatting in two passes. First we convert the questions into a
/// Vec of "fragments" (Syntax tag, String pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished/highlighted
/// String.
pub fn render(renderer: &(impl Render + ?Sized), questions: &[Question]) -> String {
    // Pass 1: lay out questions as tagged fragments
    let fragments = format_with_renderer(questions);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(
    renderer: &(impl Render + ?Sized),
    fragments: Vec<(Syntax, String)>,
) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}

use quizbank::{formatting::Render, language::*, rendering};

/// Trait for types that can present themselves via a renderer
pub trait Present {
    /// Present this value using the given renderer
    fn present(&self, renderer: &dyn Render) -> String;
}

impl Present for Question {
    fn present(&self, renderer: &dyn Render) -> String {
        rendering::render(renderer, std::slice::from_ref(self))
            .trim_end()
            .to_string()
    }
}

impl Present for [Question] {
    fn present(&self, renderer: &dyn Render) -> String {
        rendering::render(renderer, self)
    }
}

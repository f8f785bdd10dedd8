//! Rendering questions for display

mod renderer;
mod terminal;

// Re-export all public symbols
pub use renderer::*;
pub use terminal::*;

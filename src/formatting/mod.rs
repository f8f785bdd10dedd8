//! Formatting questions back into canonical Aiken text

mod formatter;
mod syntax;

// Re-export all public symbols
pub use formatter::*;
pub use syntax::*;

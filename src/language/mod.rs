// Types representing questions parsed from an Aiken question bank

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;

//! Parsing Aiken-style plain text question banks into validated multiple
//! choice questions, with line-accurate diagnostics for whatever could not
//! be read.

#[macro_use]
mod regex;

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;

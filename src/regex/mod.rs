// Compiled regular expressions, built once on first use

#[macro_use]
mod cache;

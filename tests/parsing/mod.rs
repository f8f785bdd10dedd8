// Integration tests for parsing question banks

mod errors;
mod formatter;
mod samples;

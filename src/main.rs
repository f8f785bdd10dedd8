use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Read};
use std::path::Path;
use tracing::{debug, info, Level};

use quizbank::formatting::{Identity, Render};
use quizbank::language::{LoadingError, ParseError};
use quizbank::parsing;
use quizbank::rendering::Terminal;

mod output;
mod problem;

use problem::Present;

#[derive(Eq, Debug, PartialEq)]
enum Output {
    Text,
    Json,
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let filename_arg = || {
        Arg::new("filename")
            .required(true)
            .help("The file containing the question bank, or '-' to read from standard input.")
    };

    let matches = Command::new("quizbank")
        .version(VERSION)
        .propagate_version(true)
        .about("Read Aiken format multiple choice question banks.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the parser is doing to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given question bank and report what would be imported")
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("preview")
                .about("Show where every question came from and what is wrong with those that were skipped")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["text", "json"])
                        .default_value("text")
                        .action(ArgAction::Set)
                        .help("Which kind of diagnostic output to generate."),
                )
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Write out the accepted questions in canonical form")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(filename_arg()),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename(submatches);

            let content = read(filename);

            let outcome = match parsing::parse(&content) {
                Ok(outcome) => outcome,
                Err(error) => fail(&error, filename, &content),
            };

            for skipped in &outcome.skipped {
                for issue in &skipped.issues {
                    eprintln!("{}", problem::concise_issue(issue, filename));
                }
            }
            for issue in &outcome.global_issues {
                eprintln!("{}", problem::concise_issue(issue, filename));
            }

            match output::summary(filename, &outcome) {
                Ok(summary) => print!("{}", summary),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(("preview", submatches)) => {
            let mode = match submatches
                .get_one::<String>("output")
                .map(|s| s.as_str())
            {
                Some("json") => Output::Json,
                _ => Output::Text,
            };
            debug!(?mode);

            let filename = filename(submatches);

            let content = read(filename);

            let preview = match parsing::preview(&content) {
                Ok(preview) => preview,
                Err(error) => fail(&error, filename, &content),
            };

            match mode {
                Output::Json => match output::json(&preview) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                },
                Output::Text => {
                    for span in &preview.diagnostics {
                        println!("{}", problem::concise_question_span(span, filename));
                    }
                    for skipped in &preview
                        .outcome
                        .skipped
                    {
                        println!();
                        println!(
                            "{}",
                            problem::full_skipped_question(skipped, filename, &content)
                        );
                    }
                    for issue in &preview
                        .outcome
                        .global_issues
                    {
                        println!("{}", problem::concise_issue(issue, filename));
                    }
                }
            }
        }
        Some(("format", submatches)) => {
            let raw_output = submatches.get_flag("raw-control-chars");

            let filename = filename(submatches);

            let content = read(filename);

            let outcome = match parsing::parse(&content) {
                Ok(outcome) => outcome,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::concise_parsing_error(&error, filename, &Identity)
                    );
                    std::process::exit(1);
                }
            };

            for skipped in &outcome.skipped {
                eprintln!(
                    "{}: {}:{} question skipped",
                    "warning".bright_yellow(),
                    filename.to_string_lossy(),
                    skipped.start_line
                );
            }

            let renderer: &dyn Render = if raw_output || std::io::stdout().is_terminal() {
                &Terminal
            } else {
                &Identity
            };

            print!(
                "{}",
                outcome
                    .questions
                    .present(renderer)
            );
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: quizbank [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("usage: quizbank [COMMAND] <filename>");
            std::process::exit(2);
        }
    }
}

/// Read the question bank from the named file, or from standard input if
/// the name is "-". Exits if it can't be read.
fn read(filename: &Path) -> String {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        if let Err(error) = std::io::stdin().read_to_string(&mut content) {
            let error = LoadingError {
                problem: "Failed reading".to_string(),
                details: error
                    .kind()
                    .to_string(),
                filename,
            };
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
        return content;
    }

    info!("Reading file: {}", filename.display());

    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

/// Report a failed parse in full, along with every skipped question, then
/// exit.
fn fail(error: &ParseError, filename: &Path, content: &str) -> ! {
    let renderer: &dyn Render = if std::io::stderr().is_terminal() {
        &Terminal
    } else {
        &Identity
    };

    if let ParseError::NoValidQuestions {
        skipped,
        global_issues,
    } = error
    {
        for skipped in skipped {
            eprintln!(
                "{}\n",
                problem::full_skipped_question(skipped, filename, content)
            );
        }
        for issue in global_issues {
            eprintln!("{}", problem::concise_issue(issue, filename));
        }
        if !global_issues.is_empty() {
            eprintln!();
        }
    }

    eprintln!(
        "{}",
        problem::full_parsing_error(error, filename, renderer)
    );
    std::process::exit(1);
}

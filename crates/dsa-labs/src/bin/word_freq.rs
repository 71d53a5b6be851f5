//! `word-freq` — word frequency report.
//!
//! Usage:
//!   word-freq [FILE]
//!
//! Reads FILE, or stdin when no file is given, and prints every word with its
//! count: alphabetically, then by descending frequency.

use dsa_labs::cli::{word_frequency_report, CliError};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn read_input(path: Option<&String>) -> Result<String, CliError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let text = match read_input(args.get(1)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let report = word_frequency_report(&text);
    if let Err(e) = io::stdout().write_all(report.as_bytes()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

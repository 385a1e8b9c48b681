//! Simple CLI that reads HTML from stdin and prints the detected card and
//! pagination selectors as JSON.
//!
//! Usage: `analyze_stdin [OPTIONS_JSON_FILE] < page.html`
//!
//! Set `RUST_LOG=card_scout=debug` to see which strategies fired.

use card_scout::{analyze_with_options, Options};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match Options::from_json(&json) {
                Ok(options) => options,
                Err(err) => {
                    tracing::error!(%path, %err, "invalid options file");
                    return ExitCode::FAILURE;
                }
            },
            Err(err) => {
                tracing::error!(%path, %err, "failed to read options file");
                return ExitCode::FAILURE;
            }
        },
        None => Options::default(),
    };

    let mut html = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut html) {
        tracing::error!(%err, "failed to read from stdin");
        return ExitCode::FAILURE;
    }

    match analyze_with_options(&html, &options) {
        Ok(analysis) => match serde_json::to_string_pretty(&analysis) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(%err, "failed to serialize analysis");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            tracing::error!(%err, "analysis failed");
            ExitCode::FAILURE
        }
    }
}

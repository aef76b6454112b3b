//! Binary to generate an example JSON object from a discovery document.
//!
//! Usage: `discoveryexample <DISCOVERY_DOCUMENT> <TYPE_NAME> [-o <FILE>]`
//!
//! Writes the example to stdout (or `--output`). Recursion warnings and errors
//! go to stderr; set `RUST_LOG` to change diagnostic verbosity.

use std::fs;
use std::io::{IsTerminal, Write, stderr, stdout};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use discovery_example_rs::{ExampleGenError, GenerateSettings, generate_from_file};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "discoveryexample", version, about)]
struct Cli {
    /// Path to the discovery document (JSON).
    discovery_document: PathBuf,

    /// Name of the type under `schemas` to generate an example of.
    type_name: String,

    /// Write the example to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Fail instead of substituting an empty object when a type is found within itself.
    #[arg(long)]
    deny_recursive_types: bool,
}

fn run(cli: &Cli) -> Result<(), ExampleGenError> {
    let settings = GenerateSettings {
        deny_recursive_types: cli.deny_recursive_types,
    };

    // A failed generation must not leave a partial output file.
    let mut example: Vec<u8> = Vec::new();
    generate_from_file(
        &cli.discovery_document,
        &cli.type_name,
        &mut example,
        &settings,
    )?;

    match &cli.output {
        Some(path) => fs::write(path, &example)?,
        None => stdout().lock().write_all(&example)?,
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let cli: Cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

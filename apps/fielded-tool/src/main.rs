//! CLI for checking records against an attribute schema.
//!
//! Loads a JSON schema description, builds one record from a JSON file
//! or stdin, and prints either the canonical string or the build error.

mod record;
mod schema_file;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use record::RawRecord;
use schema_file::SchemaFile;

/// Command-line arguments for the schema tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Schema description file (JSON)
    #[arg(short, long)]
    schema: PathBuf,

    /// Record to build (JSON object or array); stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print attribute descriptors instead of building a record
    #[arg(long)]
    describe: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let schema = SchemaFile::load(&args.schema)?.compile()?;
    tracing::info!(schema = schema.name(), attributes = schema.len(), "schema loaded");

    if args.describe {
        for attribute in schema.attributes() {
            println!("{}", attribute);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let text = read_input(args.input.as_ref())?;
    let json: serde_json::Value = serde_json::from_str(&text).context("Input is not valid JSON")?;
    let record = RawRecord::from_json(json)?;

    match record.build(&schema) {
        Ok(object) => {
            println!("{}", object.to_canonical_string());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

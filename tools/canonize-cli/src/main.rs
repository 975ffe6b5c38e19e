//! Canonize Command Line Tool
//!
//! Feeds JSON values through the canonical encoder:
//! - encode: print the canonical text of a JSON file
//! - hash: print the SHA256 of the canonical text
//! - eq: compare two JSON files for canonical equality

use anyhow::{Context, Result};
use canonize::{canonize, hash_canonical};
use canonize_core::Value;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "canonize")]
#[command(version)]
#[command(about = "Canonical encoding tool - deterministic text for JSON values")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical text of a JSON file
    #[command(about = "Output the canonical encoding of a JSON file")]
    Encode {
        /// Path to the JSON file, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compute SHA256 hash of the canonical text
    #[command(about = "Compute SHA256 hash of the canonical encoding")]
    Hash {
        /// Path to the JSON file, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compare two JSON files for canonical equality
    #[command(about = "Exit 0 when two JSON files have identical canonical text")]
    Eq {
        /// Path to the first JSON file
        #[arg(value_name = "A")]
        a: PathBuf,

        /// Path to the second JSON file
        #[arg(value_name = "B")]
        b: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { file } => handle_encode(&file),
        Commands::Hash { file } => handle_hash(&file),
        Commands::Eq { a, b } => handle_eq(&a, &b),
    }
}

fn handle_encode(file: &PathBuf) -> Result<()> {
    let value = read_value(file)?;
    println!("{}", canonize(&value));
    Ok(())
}

fn handle_hash(file: &PathBuf) -> Result<()> {
    let value = read_value(file)?;
    println!("{}", hash_canonical(&value));
    Ok(())
}

fn handle_eq(a: &PathBuf, b: &PathBuf) -> Result<()> {
    let canonical_a = canonize(&read_value(a)?);
    let canonical_b = canonize(&read_value(b)?);

    if canonical_a == canonical_b {
        println!("equal");
        Ok(())
    } else {
        println!("not equal");
        std::process::exit(1);
    }
}

fn read_value(file: &PathBuf) -> Result<Value> {
    let text = if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read file: {}", file.display()))?
    };

    let raw: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))?;

    Ok(Value::from(raw))
}

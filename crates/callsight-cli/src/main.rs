//! Callsight CLI
//!
//! Extracts sales-call insights (greeting, farewell, self-introduction,
//! company name, manager-requirement flag) from a transcript CSV and writes
//! the annotated table in the current working directory (or at `--out`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;

use callsight_ingest::run_extraction;

#[derive(Parser)]
#[command(name = "callsight")]
#[command(
    author,
    version,
    about = "Extract sales-call insights from Russian dialogue transcripts"
)]
struct Cli {
    /// Input transcript CSV (columns: dlg_id, role, text). Prompted for
    /// interactively when omitted.
    input: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = "out.csv")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    println!("{}", "Starting extraction...".bold());
    println!("Results will be saved in {}", cli.out.display());

    let summary = run_extraction(&input, &cli.out)?;

    println!(
        "{} {} ({} rows, {} dialogues, {} manager(s) ok)",
        "wrote".green().bold(),
        cli.out.display().to_string().bold(),
        summary.rows,
        summary.dialogues,
        summary.managers_ok
    );
    Ok(())
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter .csv file path to extract from\n> ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("no input path given"));
    }
    Ok(PathBuf::from(trimmed))
}

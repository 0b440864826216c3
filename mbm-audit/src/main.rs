mod audit;
mod migration;
mod reports;
mod site;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use audit::run_audit;
use migration::run_migration;
use site::Site;

#[derive(Debug, Parser)]
#[command(name = "mbm-audit", version = "0.1.0")]
#[command(about = "Translation coverage audit and inline-translation migration for MBM Digital")]
struct Args {
    /// Directory holding `data/<domain>.json`
    #[arg(long, global = true, default_value = "mbm-web/static")]
    content: PathBuf,

    /// Directory holding the `<code>.json` string tables
    #[arg(long, global = true, default_value = "mbm-web/i18n")]
    i18n: PathBuf,

    /// Optional path to write the report output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check key parity, placeholder drift and untranslated record fields
    Check {
        /// Output report format
        #[arg(long, default_value = "console")]
        #[arg(value_parser = ["json", "markdown", "console"])]
        report: String,

        /// Exit non-zero when any problem is found
        #[arg(long)]
        strict: bool,
    },
    /// Move inline `_ar` fields into the Arabic string table
    Migrate {
        /// Rewrite the documents and table (dry run otherwise)
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let site = Site::new(&args.content, &args.i18n);
    let mut out = open_output(args.output.as_deref())?;

    match args.command {
        Command::Check { report, strict } => {
            let audit = run_audit(&site)?;
            match report.as_str() {
                "json" => reports::generate_json_report(&mut out, &audit)?,
                "markdown" => reports::generate_markdown_report(&mut out, &audit)?,
                _ => reports::generate_console_report(&mut out, &audit)?,
            }
            out.flush()?;
            if strict && !audit.is_clean() {
                eprintln!(
                    "{} {} translation problem(s)",
                    "❌".red(),
                    audit.problem_count()
                );
                std::process::exit(1);
            }
        }
        Command::Migrate { write } => {
            let outcomes = run_migration(&site, write)?;
            reports::generate_migration_report(&mut out, &outcomes, write)?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Buffered report sink: `path` when given, stdout otherwise.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(stdout().lock())),
    })
}

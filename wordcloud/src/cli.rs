// src/cli.rs
use anyhow::{Result, anyhow};
use clap::Parser;
use std::env;
use std::io;
use std::path::PathBuf;

use crate::config::{load_config, read_config_file};
use crate::core::cloud::build_cloud;
use crate::core::filter::ReportFilter;
use crate::core::input::resolve_input;
use crate::core::report::write_report;
use crate::core::stopwords::Stopwords;
use crate::models::ReportLine;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text to analyze, or a path to a file to load and analyze
    #[arg(value_name = "TEXT_OR_PATH", required_unless_present = "input")]
    pub text: Option<String>,

    /// Explicit input; takes precedence over the positional argument
    #[arg(short, long, value_name = "TEXT_OR_PATH")]
    pub input: Option<String>,

    /// Only report words occurring at least this many times
    #[arg(short = 'm', long)]
    pub mincounts: Option<u64>,

    /// Only report words occurring at most this many times
    #[arg(short = 'n', long)]
    pub maxcounts: Option<u64>,

    /// Only report words starting with this prefix (case-sensitive; reported words are lowercase)
    #[arg(short = 's', long)]
    pub startswith: Option<String>,

    /// Configuration file (defaults to discovering wordcloud.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<()> {
    let lines = generate(&args)?;
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &lines)?;
    Ok(())
}

/// Runs the pipeline up to, but not including, output: resolves the input,
/// builds the word cloud and applies the report filter.
///
/// # Errors
///
/// This function may return an error if:
/// * The count bounds are contradictory
/// * The configuration file cannot be read or parsed
/// * The input names a file that exists but cannot be read
pub fn generate(args: &Args) -> Result<Vec<ReportLine>> {
    let filter = ReportFilter::new(args.mincounts, args.maxcounts, args.startswith.clone())?;

    let config = match &args.config {
        Some(path) => read_config_file(path)?,
        None => load_config(&env::current_dir()?)?,
    };
    let stopwords = Stopwords::from_config(&config.stopwords);

    let raw = args
        .input
        .as_deref()
        .or(args.text.as_deref())
        .ok_or_else(|| anyhow!("No input text or file provided"))?;
    let contents = resolve_input(raw)?;

    let cloud = build_cloud(&contents, &stopwords);
    Ok(filter.apply(&cloud))
}

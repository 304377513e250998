//! sharplint CLI - async-overload linting for C# sources
//!
//! Available rules:
//! - CL0001: use the async overload inside async methods

mod config;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use config::Config;
use sharplint_analyze::descriptors;
use sharplint_analyze::logging;
use sharplint_analyze::output::{format_findings, OutputFormat};
use sharplint_analyze::Analyzer;

#[derive(Parser)]
#[command(name = "sharplint")]
#[command(version = "0.1.0")]
#[command(about = "A Rust-based static analyzer for C# async code")]
#[command(author = "sharplint contributors")]
struct Cli {
    /// Files or directories to analyze
    #[arg(required_unless_present = "list_rules")]
    paths: Vec<PathBuf>,

    /// Show verbose output
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Output format: raw, json, table, github
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    format: String,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Path to config file (default: auto-detect .sharplint.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Write a debug log of the run to the given path
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Handle --list-rules
    if cli.list_rules {
        println!("{}", "Available rules:".bold());
        for descriptor in descriptors::all_descriptors() {
            println!(
                "  {} [{}] - {}",
                descriptor.id.green(),
                descriptor.category,
                descriptor.title
            );
            println!("      {}", descriptor.help_link().dimmed());
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Determine output format
    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::from_str(&cli.format).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid output format '{}'. Valid options: raw, json, table, github",
                cli.format
            )
        })?
    };

    // Load config file
    let file_config = if cli.no_config {
        Config::default()
    } else if let Some(config_path) = &cli.config {
        let cfg = Config::load_path(config_path)?;
        if cli.verbose && output_format == OutputFormat::Table {
            println!("{}: {}", "Using config".bold(), config_path.display());
        }
        cfg
    } else {
        match Config::load()? {
            Some((cfg, path)) => {
                if cli.verbose && output_format == OutputFormat::Table {
                    println!("{}: {}", "Using config".bold(), path.display());
                }
                cfg
            }
            None => Config::default(),
        }
    };

    if let Some(log_path) = &cli.debug_log {
        let path = logging::init_logger(Some(log_path))?;
        if cli.verbose {
            eprintln!("{}: {}", "Debug log".bold(), path.display());
        }
    }

    let analyze_config = file_config.into_analyze_config(cli.paths.clone());
    let analyzer = Analyzer::new(analyze_config);

    let paths: Vec<_> = cli.paths.iter().map(|p| p.as_path()).collect();
    let findings = analyzer.analyze_paths(&paths)?;

    print!("{}", format_findings(&findings, output_format));

    if findings.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

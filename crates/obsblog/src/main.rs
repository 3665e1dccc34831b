//! obsblog CLI - Obsidian vault to HTML converter.
//!
//! Reads `obs-blog.yaml` from the working directory and mirrors the
//! configured vault into the configured output directory: markdown becomes
//! HTML, everything else is copied as-is.

mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use obsblog_config::Config;
use obsblog_site::SiteBuilder;

use error::CliError;
use output::Output;

/// obsblog - Obsidian vault to HTML converter.
///
/// Takes no arguments; configuration comes from `obs-blog.yaml` in the
/// working directory.
#[derive(Parser)]
#[command(name = "obsblog", version, about)]
struct Cli;

fn main() {
    Cli::parse();
    let output = Output::new();

    // Log level comes from RUST_LOG; default is warnings only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(output: &Output) -> Result<(), CliError> {
    let config = Config::load()?;

    output.info(&format!("Source: {}", config.input.display()));
    output.info(&format!("Output: {}", config.output.display()));

    let report = SiteBuilder::new(config.input, config.output).build()?;

    for failure in &report.failures {
        output.warning(&format!(
            "Skipped {}: {}",
            failure.path.display(),
            failure.message
        ));
    }

    output.success(&format!(
        "Converted {} markdown file(s), copied {} other file(s)",
        report.converted, report.copied
    ));

    if report.has_failures() {
        return Err(CliError::Incomplete {
            failed: report.failures.len(),
        });
    }
    Ok(())
}

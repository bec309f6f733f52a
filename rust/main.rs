// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use vacation_planner::config::{Config, DEFAULT_CONFIG_PATH};
use vacation_planner::planner::{run, RunOptions};
use vacation_planner::provider::{CachedProvider, FailurePolicy, ProviderOptions, QppStudioProvider, DEFAULT_BASE_URL};
use vacation_planner::writer::{writer_for, ExportOptions, HeaderStyle};
use vacation_planner::{Result, VacationError};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OnProviderError {
    /// Stop the run.
    Abort,
    /// Continue with no holidays for the failed country.
    Empty,
}

/// Build a yearly vacation planning spreadsheet with public holidays and weekends marked.
#[derive(Debug, Parser)]
#[command(name = "vacation", version, about)]
struct Cli {
    /// Configuration file (YAML or JSON).
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write to this path instead of the configured `output`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to do when holidays of a country cannot be fetched.
    #[arg(long, value_enum, default_value = "abort")]
    on_provider_error: OnProviderError,

    /// Fetch countries concurrently.
    #[arg(long)]
    parallel: bool,

    /// Timeout of each holiday request, in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Retries per country after a failed request.
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Base URL of the holiday listings.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Bold header row.
    #[arg(long)]
    bold_header: bool,

    /// Width of every column.
    #[arg(long, default_value_t = 15.0)]
    column_width: f64,

    /// More output, repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load(&cli.config)?;
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }

    let provider = CachedProvider::new(QppStudioProvider::new(ProviderOptions {
        base_url: cli.base_url.clone(),
        timeout: Duration::from_secs(cli.timeout),
        retries: cli.retries,
        ..ProviderOptions::default()
    })?);
    let writer = writer_for(
        &config.output,
        ExportOptions {
            column_width: cli.column_width,
            header_style: if cli.bold_header {
                HeaderStyle::Bold
            } else {
                HeaderStyle::Plain
            },
            ..ExportOptions::default()
        },
    );
    let options = RunOptions {
        policy: match cli.on_provider_error {
            OnProviderError::Abort => FailurePolicy::Abort,
            OnProviderError::Empty => FailurePolicy::Empty,
        },
        parallel: cli.parallel,
    };

    run(&config, &provider, writer.as_ref(), &options)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.level())
        .parse_default_env()
        .init();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Written to stderr directly so that no log filter can hide it.
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(e: &VacationError) -> String {
    format!("error: {}", e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_the_input() {
        let cli = Cli::try_parse_from(["vacation", "-q", "/definitely/not/here/config.yml"]).unwrap();
        assert_eq!(cli.level(), LevelFilter::Error);
        let e = execute(&cli).unwrap_err();
        let message = failure_message(&e);
        assert!(message.starts_with("error: cannot read configuration"));
        assert!(message.contains("/definitely/not/here/config.yml"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vacation"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(cli.level(), LevelFilter::Info);
        assert!(matches!(cli.on_provider_error, OnProviderError::Abort));
        assert!(Cli::try_parse_from(["vacation", "-q", "-v"]).is_err());
    }
}

mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, count, normalize, Context};
use crate::error::{exit_code_for, report_error};
use areacodes_config as config;

#[derive(Debug, Parser)]
#[command(name = "areacodes", version, about = "Count phone numbers by area code")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Configuration environment (defaults to $AREACODES_ENV, then "dev")
    #[arg(long = "env", global = true)]
    environment: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize, classify and count the numbers of an input file
    Count(count::CountArgs),
    /// Print the normalized numbers of an input file
    Normalize(normalize::NormalizeArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        environment,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let environment =
                config::resolve_environment(environment).with_context(|| "resolve environment")?;
            let app_config = config::load(config_path.clone(), &environment)
                .with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => debug!(
                        path = %path.display(),
                        exists = path.exists(),
                        environment = %app_config.environment,
                        "config resolved"
                    ),
                    Err(err) => debug!(error = %err, "config unavailable"),
                }
            }

            let ctx = Context {
                json,
                config: &app_config,
            };

            match command {
                Command::Count(args) => count::count(&ctx, args),
                Command::Normalize(args) => normalize::normalize(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{collapse, completions, dedup, query, search, Context};
use crate::error::{exit_code_for, report_error};
use contactmatch_config as config;
use contactmatch_core::LibphonenumberOracle;

#[derive(Debug, Parser)]
#[command(name = "contactmatch", version, about = "contactmatch CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decide whether two values would be shown as one entry
    Collapse(collapse::CollapseArgs),
    /// Print the phone-number match type of two values
    #[command(name = "match-type")]
    MatchType(collapse::MatchTypeArgs),
    /// Collapse a list of values, one per line
    Dedup(dedup::DedupArgs),
    /// Find and highlight a query in candidate strings
    Search(search::SearchArgs),
    #[command(name = "clean-query")]
    CleanQuery(query::QueryArgs),
    #[command(name = "is-phone")]
    IsPhone(query::QueryArgs),
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
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let oracle = LibphonenumberOracle::new();
            let ctx = Context {
                json,
                config: &app_config,
                oracle: &oracle,
            };

            match command {
                Command::Collapse(args) => collapse::collapse(&ctx, args),
                Command::MatchType(args) => collapse::match_type(&ctx, args),
                Command::Dedup(args) => dedup::dedup(&ctx, args),
                Command::Search(args) => search::search(&ctx, args),
                Command::CleanQuery(args) => query::clean_query(&ctx, args),
                Command::IsPhone(args) => query::is_phone(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config loading")
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

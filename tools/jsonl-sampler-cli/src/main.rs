mod commands;
mod logging;
mod progress;

use argh::FromArgs;
use commands::{analyze::AnalyzeArgs, select::SelectArgs, split::SplitArgs};
use jsonl_sampler::prelude::*;
use std::process::ExitCode;
use thiserror::Error;

/// Profile, partition and sample line-delimited JSON datasets
#[derive(FromArgs, Debug)]
pub struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Split(SplitArgs),
    Select(SelectArgs),
}

/// Errors that end a command
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, CliError>;

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    logging::init_logging();

    let result = match args.command {
        Command::Analyze(args) => commands::analyze::run(args),
        Command::Split(args) => commands::split::run(args),
        Command::Select(args) => commands::select::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

use crate::progress::BarProgress;
use crate::Result;
use argh::FromArgs;
use jsonl_sampler::prelude::*;
use jsonl_sampler::utilities::io::file_finder::resolve_data_files;
use std::path::PathBuf;
use tracing::info;

/// profile the JSONL data files in a directory
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "analyze")]
pub struct AnalyzeArgs {
    /// directory holding the data files
    #[argh(positional)]
    input: PathBuf,

    /// print the report as JSON instead of tables
    #[argh(switch)]
    json: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let files = resolve_data_files(&args.input)?;
    info!(
        "Analyzing {} data files in {}",
        files.len(),
        args.input.display()
    );

    let bar = BarProgress::new("Analyzing");
    let report = analyze_files(&files, &bar);
    bar.finish();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }

    Ok(())
}

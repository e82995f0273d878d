use super::shared::{display_path, print_banner, print_file_table};
use crate::progress::BarProgress;
use crate::Result;
use argh::FromArgs;
use jsonl_sampler::analyze::render::format_bytes;
use jsonl_sampler::api::input_file::total_size;
use jsonl_sampler::api::settings::{DEFAULT_PARTS, DEFAULT_SPLIT_OUTPUT_DIR};
use jsonl_sampler::prelude::*;
use jsonl_sampler::utilities::io::file_finder::resolve_data_files;
use std::path::PathBuf;

/// split the lines of all data files in a directory into equally sized parts
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "split")]
pub struct SplitArgs {
    /// directory holding the data files
    #[argh(positional)]
    input: PathBuf,

    /// number of parts to write (default: 100)
    #[argh(option, default = "DEFAULT_PARTS")]
    parts: u64,

    /// directory receiving the part files (default: ./output)
    #[argh(option, default = "PathBuf::from(DEFAULT_SPLIT_OUTPUT_DIR)")]
    output_dir: PathBuf,
}

impl From<SplitArgs> for SplitSettings {
    fn from(args: SplitArgs) -> Self {
        let mut settings = SplitSettings::new(args.input);
        settings.output_dir = args.output_dir;
        settings.parts = args.parts;
        settings
    }
}

pub fn run(args: SplitArgs) -> Result<()> {
    let settings = SplitSettings::from(args);
    let target_parts = settings.validate()?;
    let files = resolve_data_files(&settings.input_dir)?;

    print_banner("✂️  JSONL Splitter");
    println!();
    println!("📂 Input directory: {}", display_path(&settings.input_dir));
    println!("📄 Data files:      {}", files.len());
    println!("📦 Total size:      {}", format_bytes(total_size(&files) as f64));
    println!("🔢 Parts:           {}", target_parts);
    println!("📁 Output dir:      {}", display_path(&settings.output_dir));
    println!();

    let bar = BarProgress::new("Splitting");
    let result = split_files(&files, &settings.output_dir, target_parts, &bar);
    bar.finish();
    let summary = result?;

    if summary.parts.is_empty() {
        println!("⚠️  No non-empty lines found, nothing was written");
        return Ok(());
    }

    let plan = &summary.plan;
    println!();
    print_banner("📋 Split Result");
    println!();
    println!("  Output dir:   {}", display_path(&settings.output_dir));
    println!("  Total lines:  {}", summary.total_lines());
    println!("  Parts:        {}", plan.parts());
    if plan.remainder() > 0 {
        println!(
            "  Lines/part:   {} (first {} parts hold one more)",
            plan.base(),
            plan.remainder()
        );
    } else {
        println!("  Lines/part:   {}", plan.base());
    }
    println!();

    let rows: Vec<(String, u64)> = summary
        .parts
        .iter()
        .map(|part| (file_name(&part.path), part.bytes))
        .collect();
    print_file_table(&rows);

    println!();
    print_banner("Split complete ✅");
    Ok(())
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

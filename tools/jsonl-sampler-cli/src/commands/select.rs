use super::shared::{display_path, listing, print_banner, print_file_table, Listing};
use crate::progress::BarProgress;
use crate::Result;
use argh::FromArgs;
use jsonl_sampler::analyze::render::{format_bytes, format_percentage};
use jsonl_sampler::analyze::report::percentage;
use jsonl_sampler::api::input_file::total_size;
use jsonl_sampler::api::settings::DEFAULT_SELECT_OUTPUT_DIR;
use jsonl_sampler::prelude::*;
use jsonl_sampler::utilities::io::file_finder::resolve_part_files;
use std::path::PathBuf;

/// copy an evenly spaced or random subset of part files to another directory
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "select")]
pub struct SelectArgs {
    /// directory holding the part_*.jsonl files
    #[argh(positional)]
    input: PathBuf,

    /// fraction of files to select, exclusive with --count (default: 0.1)
    #[argh(option)]
    ratio: Option<f64>,

    /// number of files to select, exclusive with --ratio
    #[argh(option)]
    count: Option<usize>,

    /// selection mode: even or random (default: even)
    #[argh(option, default = "String::from(\"even\")")]
    mode: String,

    /// directory receiving the selected files (default: ./selected)
    #[argh(option, default = "PathBuf::from(DEFAULT_SELECT_OUTPUT_DIR)")]
    output_dir: PathBuf,

    /// seed for random mode
    #[argh(option)]
    seed: Option<u64>,
}

impl TryFrom<SelectArgs> for SelectSettings {
    type Error = ConfigError;

    fn try_from(args: SelectArgs) -> core::result::Result<Self, Self::Error> {
        let mut settings = SelectSettings::new(args.input);
        settings.output_dir = args.output_dir;
        settings.ratio = args.ratio;
        settings.count = args.count;
        settings.mode = args.mode.parse()?;
        settings.seed = args.seed;
        Ok(settings)
    }
}

pub fn run(args: SelectArgs) -> Result<()> {
    let settings = SelectSettings::try_from(args)?;
    let amount = settings.validate()?;
    let files = resolve_part_files(&settings.input_dir)?;

    let total_count = files.len();
    let select_count = amount.resolve(total_count);
    let all_size = total_size(&files);
    let mode_label = match settings.mode {
        SelectionMode::Even => "evenly spaced",
        SelectionMode::Random => "random",
    };

    print_banner("🔍 JSONL Part Selector");
    println!();
    println!("📂 Input directory: {}", display_path(&settings.input_dir));
    println!("📄 Part files:      {}", total_count);
    println!("📦 Total size:      {}", format_bytes(all_size as f64));
    println!("🎯 Selecting:       {} / {}", select_count, total_count);
    println!(
        "📊 Ratio:           {}",
        format_percentage(percentage(select_count as u64, total_count as u64))
    );
    println!("🔀 Mode:            {} ({})", mode_label, settings.mode);
    println!("📁 Output dir:      {}", display_path(&settings.output_dir));
    if let (SelectionMode::Random, Some(seed)) = (settings.mode, settings.seed) {
        println!("🎲 Seed:            {}", seed);
    }
    println!();

    let selected = select_files(&files, select_count, settings.mode, settings.seed);
    print_selection(&selected);
    println!();

    let bar = BarProgress::new("Copying");
    let result = copy_selected(&selected, &settings.output_dir, &bar);
    bar.finish();
    result?;
    println!("  ✅ Copied {} files", selected.len());

    let selected_size = total_size(&selected);
    println!();
    print_banner("📋 Selection Summary");
    println!();
    println!("  Output dir:     {}", display_path(&settings.output_dir));
    println!("  Selected files: {} / {}", selected.len(), total_count);
    println!(
        "  File ratio:     {}",
        format_percentage(percentage(selected.len() as u64, total_count as u64))
    );
    println!("  Selected size:  {}", format_bytes(selected_size as f64));
    println!("  Original size:  {}", format_bytes(all_size as f64));
    println!(
        "  Size ratio:     {}",
        format_percentage(percentage(selected_size, all_size))
    );
    println!();

    let rows: Vec<(String, u64)> = selected
        .iter()
        .map(|file| (file.name.clone(), file.size))
        .collect();
    print_file_table(&rows);

    println!();
    print_banner("Selection complete ✅");
    Ok(())
}

fn print_selection(selected: &[InputFile]) {
    let row = |file: &InputFile| {
        println!("  ├── {}  ({})", file.name, format_bytes(file.size as f64));
    };

    println!("📋 Selected files ({}):", selected.len());
    match listing(selected, 20, 5) {
        Listing::Full(items) => items.iter().for_each(row),
        Listing::Truncated {
            head,
            omitted,
            tail,
        } => {
            head.iter().for_each(row);
            println!("  ├── ... ({} more)", omitted);
            tail.iter().for_each(row);
        }
    }
}

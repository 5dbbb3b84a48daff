use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "sample_color",
    version,
    about = "Print the representative #rrggbb color of a photo"
)]
struct Cli {
    /// Source photo.
    input: PathBuf,

    /// Side of a square crop centered on the image; omit it or pass 0 to use the whole image.
    box_size: Option<u32>,

    /// How channels are reduced to one value.
    #[arg(long, value_enum, default_value_t = AggregateChoice::Mean)]
    aggregate: AggregateChoice,

    /// Log diagnostics to stderr.
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AggregateChoice {
    Mean,
    Median,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let opts = sheetstack::SampleOpts {
        crop: cli.box_size.filter(|&side| side != 0),
        aggregate: match cli.aggregate {
            AggregateChoice::Mean => sheetstack::Aggregate::Mean,
            AggregateChoice::Median => sheetstack::Aggregate::Median,
        },
    };
    let color = sheetstack::sample_color_file(&cli.input, &opts)
        .with_context(|| format!("sample color from '{}'", cli.input.display()))?;

    println!("{color}");
    Ok(())
}

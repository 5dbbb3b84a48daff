use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "render_sheets",
    version,
    about = "Render a stack of glossy sheets tinted with a photo's color"
)]
struct Cli {
    /// Source photo the sheet color is sampled from.
    input: PathBuf,

    /// Output PNG path.
    output: PathBuf,

    /// Built-in look (default: paper). A --config file carries its own style instead.
    #[arg(long, value_enum, conflicts_with = "config")]
    style: Option<StyleChoice>,

    /// JSON config file; fields it omits keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log per-stage diagnostics to stderr.
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    /// Top-band gloss.
    Paper,
    /// Radial sheen.
    Metallic,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => sheetstack::SheetsConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => match cli.style {
            Some(StyleChoice::Paper) | None => sheetstack::SheetsConfig::paper(),
            Some(StyleChoice::Metallic) => sheetstack::SheetsConfig::metallic(),
        },
    };

    let report = sheetstack::render_sheets_file(&cli.input, &cli.output, &config)
        .with_context(|| format!("render sheets from '{}'", cli.input.display()))?;

    println!("{}", report.color);
    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

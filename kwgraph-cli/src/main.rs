//! kwgraph CLI - keyword table to force-graph JSON.
//!
//! Reads a workbook of categorized keywords and writes the `{nodes, links}`
//! document consumed by the D3 front-end.

use anyhow::{Context, Result};
use clap::Parser;
use kwgraph_core::{builder, exporter, reader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod constants;
mod output;

use config::{KwgraphConfig, Overrides, Settings};
use output::{BuildSummary, OutputFormat};

/// Build a category/keyword graph from a spreadsheet.
///
/// Every primary category becomes a parent node carrying its topics, every
/// keyword a child node, and each category is linked to the keywords of
/// its rows.
#[derive(Parser)]
#[command(name = "kwgraph")]
#[command(author, version)]
#[command(about = "Build a category/keyword graph from a spreadsheet")]
#[command(after_help = "Examples:
  kwgraph                         Read test1.xlsx, write data.json
  kwgraph keywords.xlsx -o web/data.json
  kwgraph --sheet Hoja2 --dedupe-links")]
pub struct Cli {
    /// Input workbook (.xlsx, .xls, .ods) [default: test1.xlsx]
    input: Option<PathBuf>,

    /// Output JSON file [default: data.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sheet to read (defaults to the first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Spaces per JSON indentation level, 0 for compact output
    #[arg(long)]
    indent: Option<usize>,

    /// Drop links repeating an already seen source/target pair
    #[arg(long)]
    dedupe_links: bool,

    /// Config file (defaults to .kwgraphrc.toml in the working directory)
    #[arg(long, env = "KWGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Read, build, write. Nothing is written unless every row was read.
fn run(settings: &Settings) -> Result<BuildSummary> {
    let rows = reader::read_rows(&settings.input, settings.sheet.as_deref(), &settings.columns)
        .with_context(|| format!("Failed to load {}", settings.input.display()))?;

    let graph = builder::build(&rows);
    let built = graph.stats();

    let written = exporter::json::write(&graph, &settings.output, &settings.export)
        .with_context(|| format!("Failed to write {}", settings.output.display()))?;

    let mut summary = BuildSummary::new(
        settings.input.display().to_string(),
        settings.output.display().to_string(),
        rows.len(),
        written,
    );
    summary.links_removed = built.links - written.links;
    Ok(summary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = match cli.config {
        Some(ref path) => KwgraphConfig::load_from(path)?,
        None => KwgraphConfig::load(std::path::Path::new(".")),
    };
    let settings = config.resolve(Overrides {
        input: cli.input,
        output: cli.output,
        sheet: cli.sheet,
        indent: cli.indent,
        dedupe_links: cli.dedupe_links,
    });
    tracing::debug!(?settings, "resolved settings");

    let summary = run(&settings)?;
    if !cli.quiet {
        println!("{}", summary.render(cli.format)?);
    }
    Ok(())
}

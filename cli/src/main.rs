use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use portfolio_content::{default_content, load_content_str};
use portfolio_core::{Timeline, TimelineSelection};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-cli",
    about = "Print the portfolio timeline in chronological order."
)]
struct Args {
    /// Content JSON file. The bundled content is used when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Index of the entry to show in detail (defaults to the latest).
    #[arg(short, long)]
    select: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let content = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read file {path:?}"))?;
            load_content_str(&data).with_context(|| format!("Invalid content in {path:?}"))?
        }
        None => default_content().context("Bundled content is invalid")?,
    };

    let timeline = content.timeline().context("Could not build timeline")?;
    let mut selection = timeline.latest_selection()?;
    if let Some(index) = args.select {
        selection.select(index)?;
    }
    info!(entries = timeline.len(), active = selection.index(), "timeline ready");

    match args.format {
        Format::Text => print_text(&timeline, &selection),
        Format::Json => print_json(&timeline, &selection)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_text(timeline: &Timeline, selection: &TimelineSelection) {
    for (index, entry) in timeline.entries().iter().enumerate() {
        let marker = if selection.is_active(index) { '>' } else { ' ' };
        println!(
            "{marker} {index:>2}  {}  {:<15}  {}  [{}]",
            entry.start_date,
            entry.category.label(),
            entry.title,
            entry.badge
        );
    }

    if let Some(active) = selection.active(timeline) {
        println!("\n{}: {}\n{}\n{}", active.category, active.title, active.badge, active.detail);
    }
}

fn print_json(timeline: &Timeline, selection: &TimelineSelection) -> anyhow::Result<()> {
    let output = json!({
        "active_index": selection.index(),
        "active": selection.active(timeline),
        "entries": timeline,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

use crate::config::Settings;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod domain;
mod errors;
mod pipeline;
mod scraper;
mod spreadsheets;
mod templates;
mod transit;

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "asunnot_map")]
/// Fetch rental listings, rank them by price per square metre and draw them on a map.
struct Args {
    /// JSON settings file. Any field left out keeps its default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the map document.
    #[arg(long)]
    map_out: Option<PathBuf>,

    /// Where to write the spreadsheet snapshot.
    #[arg(long)]
    xlsx_out: Option<PathBuf>,

    /// Skip the spreadsheet snapshot.
    #[arg(long)]
    no_xlsx: bool,

    /// CSV of transit stops (network code, Y, X) to overlay on the map.
    #[arg(long)]
    transit_stops: Option<PathBuf>,
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    match pipeline::run(&settings) {
        Ok(summary) => tracing::info!(
            listings = summary.listings,
            markers = summary.markers,
            truncated = summary.truncated,
            "run complete"
        ),
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            std::process::exit(1);
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings, errors::PipelineError> {
    let mut settings = Settings::load(args.config.as_deref())?;

    if let Some(path) = &args.map_out {
        settings.output.map_path = path.clone();
    }
    if let Some(path) = &args.xlsx_out {
        settings.output.xlsx_path = path.clone();
    }
    if args.no_xlsx {
        settings.output.write_xlsx = false;
    }
    if let Some(path) = &args.transit_stops {
        settings.output.transit_stops_path = Some(path.clone());
    }

    Ok(settings)
}

// pipeline.rs
use crate::config::Settings;
use crate::domain::{mean_rent, normalize_listings, rank_listings, ListingRow, RankedListing};
use crate::errors::PipelineError;
use crate::scraper::{FetchedCards, OikotieClient};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::{render_map, write_document, MapInput};
use crate::transit::read_transit_stops;

#[derive(Debug)]
pub struct Report {
    pub ranked: Vec<RankedListing>,
    pub mean_rent: Option<f64>,
}

#[derive(Debug, PartialEq)]
pub struct RunSummary {
    pub listings: usize,
    pub markers: usize,
    pub skipped: usize,
    pub truncated: bool,
    pub mean_rent: Option<f64>,
}

/// Ranking stage on already normalized rows. No I/O.
pub fn process(rows: Vec<ListingRow>) -> Result<Report, PipelineError> {
    let ranked = rank_listings(rows)?;
    let mean_rent = mean_rent(&ranked);
    Ok(Report { ranked, mean_rent })
}

/// Fetches one batch of cards and writes the spreadsheet and map.
pub fn run(settings: &Settings) -> Result<RunSummary, PipelineError> {
    let client = OikotieClient::new(settings.endpoints.clone())?;

    let tokens = client.fetch_tokens()?;
    tracing::info!("session tokens acquired");

    let fetched = client.fetch_cards(&tokens, &settings.search)?;
    tracing::info!(count = fetched.cards.len(), found = ?fetched.found, "cards fetched");

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    write_outputs(fetched, settings, &generated)
}

/// Everything after the fetch: normalize, spreadsheet, rank, map.
pub fn write_outputs(
    fetched: FetchedCards,
    settings: &Settings,
    generated: &str,
) -> Result<RunSummary, PipelineError> {
    let truncated = fetched.truncated();
    let rows = normalize_listings(&fetched.cards);

    if settings.output.write_xlsx {
        export_listings_xlsx(&rows, &settings.output.xlsx_path)?;
    }

    let report = process(rows)?;
    if let Some(mean) = report.mean_rent {
        tracing::info!(mean_rent = mean.round(), "listings ranked");
    }

    let stops = match &settings.output.transit_stops_path {
        Some(path) => read_transit_stops(path, &settings.map.transit_networks)?,
        None => Vec::new(),
    };

    let doc = render_map(
        &MapInput {
            listings: &report.ranked,
            stops: &stops,
            mean_rent: report.mean_rent,
            generated,
        },
        &settings.map,
    );
    write_document(&settings.output.map_path, doc.markup)?;

    tracing::info!(
        path = %settings.output.map_path.display(),
        markers = doc.markers,
        skipped = doc.skipped,
        stops = stops.len(),
        "map written"
    );

    Ok(RunSummary {
        listings: report.ranked.len(),
        markers: doc.markers,
        skipped: doc.skipped,
        truncated,
        mean_rent: report.mean_rent,
    })
}
